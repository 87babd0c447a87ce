pub mod general;
pub mod geometry;

#[cfg(test)]
mod general_tests {
    use crate::general::InputValueError;

    #[test]
    fn test_input_value_error_display() {
        assert_eq!(InputValueError.to_string(), "Invalid input value");
    }
    #[test]
    fn test_input_value_error_downcast() {
        let err: Box<dyn std::error::Error> = Box::new(InputValueError);
        assert!(err.downcast_ref::<InputValueError>().is_some());
    }
}
