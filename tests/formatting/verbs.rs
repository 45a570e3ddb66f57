#[cfg(test)]
mod verify {
    use std::f64::consts::PI;

    use sprintf::{sprintf, sprintf_with, Options, Value};

    #[test]
    fn floating_point_verbs() {
        assert_eq!(sprintf!("%f", PI), "3.141593");
        assert_eq!(sprintf!("%F", 2), "2.000000");
        assert_eq!(sprintf!("%8.3f", PI), "   3.142");
        assert_eq!(sprintf!("%.0f", 7.6), "8");
        assert_eq!(sprintf!("%e", 1024), "1.024000e+3");
        assert_eq!(sprintf!("%E", 1024), "1.024000E+3");
        assert_eq!(sprintf!("%+.2e", 12345), "+1.23e+4");
        assert_eq!(sprintf!("%.3e", -0.000123), "-1.230e-4");
    }

    #[test]
    fn general_verb() {
        assert_eq!(sprintf!("%g", 42), "42");
        assert_eq!(sprintf!("%g", 0.25), "0.250000");
        assert_eq!(sprintf!("%.3g", 2.71828), "2.72");
        assert_eq!(sprintf!("%g", 2500000), "2.500000e+6");
        assert_eq!(sprintf!("%.2G", 2500000), "2.50E+6");
        assert_eq!(sprintf!("%+g", 3), "+3");
    }

    #[test]
    fn integer_verbs_truncate() {
        assert_eq!(sprintf!("%d", 9.99), "9");
        assert_eq!(sprintf!("%d", -9.99), "-9");
        assert_eq!(sprintf!("%x", 255.9), "ff");
        assert_eq!(sprintf!("%x", -255), "-ff");
        assert_eq!(sprintf!("%b", "0x0f"), "1111");
        assert_eq!(sprintf!("%d", true), "1");
        assert_eq!(sprintf!("%+d", 0), "+0");
    }

    #[test]
    fn unicode_verb() {
        assert_eq!(sprintf!("%U", 65), "U+0041");
        assert_eq!(sprintf!("%U", 0x1F600), "U+1F600");
        assert_eq!(sprintf!("%8U", 65), "  U+0041");
    }

    #[test]
    fn character_and_quoting() {
        assert_eq!(sprintf!("%c%c%c", 82, 117, 115), "Rus");
        assert_eq!(sprintf!("%c", "xyz"), "x");
        assert_eq!(sprintf!("%q", 66), "'B'");
        assert_eq!(sprintf!("%q", -67.9), "'C'");
        assert_eq!(sprintf!("%q", "say \"hi\""), "\"say \"hi\"\"");
        assert_eq!(sprintf!("%5q", "a"), "  \"a\"");
    }

    #[test]
    fn text_truth_and_type() {
        assert_eq!(sprintf!("%s", 1.5), "1.5");
        assert_eq!(sprintf!("%s", vec![1, 2, 3]), "1,2,3");
        assert_eq!(sprintf!("%-6s|", "ab"), "ab    |");
        assert_eq!(sprintf!("%t %t %t", 0, "x", false), "false true false");
        assert_eq!(sprintf!("%T %T %T", 1, "s", true), "number string boolean");
        assert_eq!(
            sprintf("%T", &[Value::instance("Invoice", [("total", Value::from(10))])]),
            "class Invoice"
        );
        assert_eq!(
            sprintf("%T", &[Value::anonymous(Vec::<(String, Value)>::new())]),
            "class anonymous"
        );
    }

    #[test]
    fn default_value_verb() {
        assert_eq!(sprintf!("%v", 12), "12");
        assert_eq!(sprintf!("%v", 1.5), "1.500000");
        assert_eq!(sprintf!("%v", "12"), "12");
        assert_eq!(sprintf!("%v", "words"), "words");
        assert_eq!(sprintf!("%v", false), "false");
        assert_eq!(sprintf!("%+v", 3), "+3");

        let record = Value::object([
            ("name", Value::from("disk")),
            ("free", Value::from(0.5)),
            ("mounts", Value::from(vec!["/", "/home"])),
        ]);
        assert_eq!(sprintf("%v", &[record.clone()]), "[object Object]");
        assert_eq!(
            sprintf("%#v", &[record]),
            r#"{"name":"disk","free":0.5,"mounts":["/","/home"]}"#
        );
        assert_eq!(sprintf!("%#v", vec![1, 2]), "[1,2]");
        assert_eq!(sprintf!("%#v", 7), "7");
    }

    #[test]
    fn pointer_renders_empty() {
        assert_eq!(sprintf!("[%p]", 1), "[]");
        assert_eq!(sprintf!("[%3p]", 1), "[   ]");
    }

    #[test]
    fn space_flag() {
        assert_eq!(sprintf!("% d", 5), " 5");
        assert_eq!(sprintf!("% 4d", 5), "   5");
        assert_eq!(sprintf!("%- 4d|", 5), " 5  |");
    }

    #[test]
    fn indirect_width_and_precision() {
        assert_eq!(sprintf!("%[1]*d|", 5, 42), "   42|");
        assert_eq!(sprintf!("%[2]*.[3]*[1]f", PI, 8, 2), "    3.14");
        assert_eq!(sprintf!("%-[1]*s|", 4, "ab"), "ab  |");
    }

    #[test]
    fn explicit_indices() {
        assert_eq!(sprintf!("%[2]s %[1]s", "world", "hello"), "hello world");
        assert_eq!(sprintf!("%[1]d %[1]x %[1]o", 64), "64 40 100");
        assert_eq!(sprintf!("%[3]d %d", 1, 2, 3), "3 %!d(Bad Index)");
    }

    #[test]
    fn configured_precision() {
        let options = Options {
            default_precision: 2,
            ..Options::default()
        };
        assert_eq!(sprintf_with(&options, "%f", &[Value::from(PI)]), "3.14");
        assert_eq!(sprintf_with(&options, "%e", &[Value::from(PI)]), "3.14e+0");

        let options = Options {
            precision_bias: 0,
            ..Options::default()
        };
        assert_eq!(sprintf_with(&options, "%f", &[Value::from(PI)]), "3.14159");
    }
}
