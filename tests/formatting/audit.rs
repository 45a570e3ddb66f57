#[cfg(test)]
mod verify {
    use sprintf::{expand, sprintf, sprintf_with, Options, Value};

    #[test]
    fn leftovers_listed_in_order() {
        let values = [
            Value::from(1),
            Value::from(vec![1, 2]),
            Value::object([("a", Value::from("b"))]),
            Value::from(true),
        ];
        assert_eq!(
            sprintf("%d", &values),
            r#"1 %!(Unformated Arguments: object=[1,2], object={"a":"b"}, boolean=true)"#
        );
    }

    #[test]
    fn absent_leftovers() {
        assert_eq!(
            sprintf("", &[Value::Null, Value::Undefined]),
            " %!(Unformated Arguments: object=null, undefined=undefined)"
        );
    }

    #[test]
    fn explicit_indices_skip_the_audit() {
        assert_eq!(sprintf!("%[1]d", 1, 2), "1");
        assert_eq!(sprintf!("%[1]*d", 3, 4, 5), "  4");
        assert_eq!(sprintf!("%[1]%%d", 1, 2), "%1");
        assert_eq!(sprintf!("%[2]z %d", 1, 2), "%!z(Wrong Format) 1");
    }

    #[test]
    fn brackets_in_literal_text_do_not() {
        assert_eq!(
            sprintf!("[x] %d", 1, 2),
            "[x] 1 %!(Unformated Arguments: number=2)"
        );
    }

    #[test]
    fn percent_escape_consumes_nothing() {
        assert_eq!(
            sprintf!("100%%", 7),
            "100% %!(Unformated Arguments: number=7)"
        );
    }

    #[test]
    fn audit_can_be_disabled() {
        let options = Options {
            audit: false,
            ..Options::default()
        };
        assert_eq!(
            sprintf_with(&options, "%d", &[Value::from(1), Value::from(2)]),
            "1"
        );
    }

    #[test]
    fn audit_problem_at_end_of_template() {
        let template = "%s";
        let expansion = expand(
            &Options::default(),
            template,
            &[Value::from("a"), Value::from("b")],
        );

        assert_eq!(expansion.problems.len(), 1);
        let problem = &expansion.problems[0];
        assert_eq!(problem.offset, template.len());
        assert_eq!(
            &expansion.text[problem.range.clone()],
            "%!(Unformated Arguments: string=b)"
        );
    }
}
