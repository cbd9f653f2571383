use anon_core::{AnonTask, Descriptor, Result};

// Optional +34 prefix, then 9 digits starting with 6-9, grouped 3-3-3 or 3-2-2-2
const PHONE_PATTERN: &str = r"(?x)
    (?:\+34[\ -]?|\b)
    [6-9][0-9]{2}
    (?:[\ -]?[0-9]{3}[\ -]?[0-9]{3} | [\ -]?[0-9]{2}[\ -]?[0-9]{2}[\ -]?[0-9]{2})
    \b";

pub fn anon_tasks() -> Result<Vec<Descriptor>> {
    Ok(vec![Descriptor::pattern(
        AnonTask::PhoneNumber,
        PHONE_PATTERN,
        "Spanish phone numbers (mobile & landline, optional +34 prefix)",
    )?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_numbers() {
        let tasks = anon_tasks().unwrap();
        let sub = tasks[0].bind("<PHONE_NUMBER>".to_string()).unwrap();

        let (text, count) = sub.apply("Llámame al 612 345 678 o al +34 912 34 56 78");
        assert_eq!(text, "Llámame al <PHONE_NUMBER> o al <PHONE_NUMBER>");
        assert_eq!(count, 2);

        let (text, count) = sub.apply("Pedido 512345678");
        assert_eq!(text, "Pedido 512345678");
        assert_eq!(count, 0);
    }
}
