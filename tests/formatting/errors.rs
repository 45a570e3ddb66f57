#[cfg(test)]
mod verify {
    use sprintf::{expand, sprintf, Options, Value};

    #[test]
    fn argument_selection() {
        assert_eq!(sprintf!("%[5]d", 1), "%!d(Bad Index: 5)");
        assert_eq!(sprintf!("%[0]d", 1), "%!d(Bad Index: 0)");
        assert_eq!(sprintf!("%*d"), "%!d(Missing Index)");
        assert_eq!(sprintf!("%d %d %d", 1, 2), "1 2 %!d(Bad Index)");
    }

    #[test]
    fn width_and_precision() {
        assert_eq!(sprintf!("%5-d", 1), "%!d(Bad Width: 5-)");
        assert_eq!(sprintf!("%70000d", 1), "%!d(Bad Width: 70000)");
        assert_eq!(sprintf!("%[1]*d", "wide", 2), "%!d(Bad Precision: wide)");
        assert_eq!(sprintf!("%[1]*d", 2.5, 2), "%!d(Bad Precision: 2.5)");
        assert_eq!(sprintf!("%[1]*d", -3, 2), "%!d(Bad Precision: -3)");
        assert_eq!(sprintf!("%[9]*d", 1), "%!d(Bad Precision)");
        assert_eq!(sprintf!("%[0]*d", 1), "%!d(Bad Width)");
        assert_eq!(sprintf!("%.[1]*f", 0, 2), "%!f(Bad Precision)");
        assert_eq!(sprintf!("%.101e", 1), "%!e(Bad Precision: 101)");
        assert_eq!(sprintf!("%.0g", 1.5), "%!g(Bad Precision)");
        assert_eq!(
            sprintf!("%.18446744073709551615f", 1.5),
            "%!f(Bad Precision: 18446744073709552000)"
        );
    }

    #[test]
    fn absent_values() {
        assert_eq!(sprintf!("%d %s", Value::Null, "x"), "%!(null) x");
        assert_eq!(sprintf("%s", &[Value::Undefined]), "%!(undefined)");
        assert_eq!(sprintf!("%v", None::<i32>), "%!(null)");
    }

    #[test]
    fn wrong_types() {
        assert_eq!(sprintf!("%q", true), "%!q(Wrong Type: true)");
        assert_eq!(sprintf!("%d then %d", "x", 2), "%!d(Wrong Type: x) then 2");
        assert_eq!(
            sprintf("%e", &[Value::instance("Point", [("x", Value::from(1))])]),
            "%!e(Wrong Type: Point)"
        );
        assert_eq!(sprintf!("%c", ""), "%!c(Empty Character)");
    }

    #[test]
    fn malformed_directives() {
        assert_eq!(sprintf!("%z"), "%!z(Wrong Format)");
        assert_eq!(sprintf!("50%"), "50%!(No Variable)");
        assert_eq!(sprintf!("%5"), "%!(No Variable)5");
        assert_eq!(sprintf!("100%!"), "100%!(No Variable)!");
        assert_eq!(sprintf!("%!x"), "%!(No Variable)!x");
        assert_eq!(sprintf!("rate %!( %d", 5), "rate %!(No Variable)!( 5");
    }

    #[test]
    fn upper_case_forms() {
        assert_eq!(sprintf!("%E", f64::INFINITY), "INFINITY");
        assert_eq!(sprintf!("%G", f64::NEG_INFINITY), "-INFINITY");
        assert_eq!(sprintf!("%e", f64::INFINITY), "Infinity");
    }

    #[test]
    fn failures_do_not_stop_expansion() {
        assert_eq!(
            sprintf!("%d, %s, %x", "one", "two", 255),
            "%!d(Wrong Type: one), two, ff"
        );
    }

    #[test]
    fn problems_located() {
        let values = [Value::from("x"), Value::from(2)];
        let expansion = expand(&Options::default(), "ab %d %d", &values);

        assert_eq!(expansion.text, "ab %!d(Wrong Type: x) 2");
        assert_eq!(expansion.problems.len(), 1);

        let problem = &expansion.problems[0];
        assert_eq!(problem.offset, 3);
        assert_eq!(&expansion.text[problem.range.clone()], "%!d(Wrong Type: x)");
        assert!(!expansion.is_clean());
    }

    #[test]
    fn clean_expansion() {
        let expansion = expand(&Options::default(), "%s!", &[Value::from("hi")]);
        assert_eq!(expansion.text, "hi!");
        assert!(expansion.is_clean());
    }
}
