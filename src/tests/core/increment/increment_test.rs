#[cfg(test)]
mod tests {
    use crate::core::counter::Counter;
    use crate::core::increment::{double_increment, Incrementable, PostIncrement, PreIncrement};

    fn assert_incrementable<T: Incrementable>() {}

    #[test]
    fn test_primitives_are_incrementable() {
        assert_incrementable::<u8>();
        assert_incrementable::<u64>();
        assert_incrementable::<usize>();
        assert_incrementable::<i32>();
        assert_incrementable::<i128>();
        assert_incrementable::<f64>();
        assert_incrementable::<Counter>();
    }

    #[test]
    fn test_double_increment_int() {
        let mut x = 2;
        assert_eq!(*double_increment(&mut x), 4);
        assert_eq!(x, 4);
    }

    #[test]
    fn test_double_increment_result_aliases_argument() {
        let mut x: i64 = -1;
        *double_increment(&mut x) += 10;
        assert_eq!(x, 11);
    }

    #[test]
    fn test_double_increment_float() {
        let mut x = 0.5_f64;
        assert_eq!(*double_increment(&mut x), 2.5);
    }

    #[test]
    fn test_post_increment_yields_previous_value() {
        let mut x: u32 = 9;
        assert_eq!(x.post_increment(), 9);
        assert_eq!(x, 10);
    }

    #[test]
    fn test_pre_increment_yields_new_value() {
        let mut x: i8 = -3;
        assert_eq!(*x.pre_increment(), -2);
        assert_eq!(x, -2);
    }

    /// Post-increment may yield a different type as long as it converts back.
    #[derive(Debug, PartialEq)]
    struct Step(u8);

    struct Snapshot(u8);

    impl From<Snapshot> for Step {
        fn from(snapshot: Snapshot) -> Self {
            Step(snapshot.0)
        }
    }

    impl PostIncrement for Step {
        type Output = Snapshot;

        fn post_increment(&mut self) -> Snapshot {
            let previous = Snapshot(self.0);
            self.0 += 1;
            previous
        }
    }

    impl PreIncrement for Step {
        type Target = Step;

        fn pre_increment(&mut self) -> &mut Step {
            self.0 += 1;
            self
        }
    }

    #[test]
    fn test_convertible_post_increment_output() {
        assert_incrementable::<Step>();
        let mut step = Step(0);
        assert_eq!(*double_increment(&mut step), Step(2));
    }
}
