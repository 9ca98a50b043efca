mod increment_test;
