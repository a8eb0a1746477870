use proptest::prelude::*;
use strkit::{indent, left_pad, len_rune, pad, right_pad, succ, unindent};

proptest! {
    #[test]
    fn left_pad_reaches_target(s in "[a-z]{0,10}", p in "[#*-]{1,3}", extra in 0usize..12) {
        let target = len_rune(&s) + extra;
        prop_assert_eq!(len_rune(&left_pad(&s, &p, target)), target);
    }

    #[test]
    fn right_pad_reaches_target(s in "[a-z]{0,10}", p in "[#*-]{1,3}", extra in 0usize..12) {
        let target = len_rune(&s) + extra;
        prop_assert_eq!(len_rune(&right_pad(&s, &p, target)), target);
    }

    #[test]
    fn pad_is_left_heavy_by_at_most_one_unit(s in "[a-z]{1,10}", p in "[#*-]{1,3}", extra in 0usize..12) {
        let target = len_rune(&s) + extra;
        let out = pad(&s, &p, target);
        prop_assert_eq!(len_rune(&out), target);

        let left = out.chars().take_while(|c| !c.is_ascii_lowercase()).count();
        let right = out.chars().rev().take_while(|c| !c.is_ascii_lowercase()).count();
        prop_assert!(left >= right);
        prop_assert!(left - right <= len_rune(&p));
    }

    #[test]
    fn succ_grows_by_at_most_one(s in "[a-zA-Z0-9*-]{0,12}") {
        let n = len_rune(&s);
        let m = len_rune(&succ(&s));
        prop_assert!(m == n || m == n + 1);
        if !s.is_empty() {
            prop_assert_ne!(succ(&s), s);
        }
    }

    #[test]
    fn crlf_input_gives_crlf_output(lines in prop::collection::vec("[ a-z]{0,8}", 2..6)) {
        let input = lines.join("\r\n");
        for out in [unindent(&input), indent(&input, "  ")] {
            prop_assert!(!out.replace("\r\n", "").contains('\n'));
        }
    }

    #[test]
    fn lf_input_gives_lf_output(lines in prop::collection::vec("[ a-z]{0,8}", 1..6)) {
        let input = lines.join("\n");
        for out in [unindent(&input), indent(&input, "\t")] {
            prop_assert!(!out.contains('\r'));
        }
    }
}
