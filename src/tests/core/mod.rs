mod increment;
