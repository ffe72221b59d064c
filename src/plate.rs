/// Spaces out a vehicle plate one character at a time.
///
/// Existing whitespace is dropped first, so already-spaced plates come back
/// unchanged. Works on Unicode scalar values, so Arabic plates split per letter.
pub fn format_plate_number(plate: &str) -> String {
    let mut spaced = String::with_capacity(plate.len() * 2);
    for ch in plate.chars().filter(|c| !c.is_whitespace()) {
        if !spaced.is_empty() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }
    spaced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_plate_number_cases() {
        struct TestCase {
            input:       &'static str,
            expected:    &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "ABC1234",
                expected:    "A B C 1 2 3 4",
                description: "latin plate",
            },
            TestCase {
                input:       "",
                expected:    "",
                description: "empty",
            },
            TestCase {
                input:       "A B C",
                expected:    "A B C",
                description: "already spaced",
            },
            TestCase {
                input:       "  AB \t 12\n",
                expected:    "A B 1 2",
                description: "mixed whitespace",
            },
            TestCase {
                input:       "   ",
                expected:    "",
                description: "whitespace only",
            },
            TestCase {
                input:       "أبج١٢٣",
                expected:    "أ ب ج ١ ٢ ٣",
                description: "arabic letters and digits",
            },
        ];

        for case in &cases {
            assert_eq!(format_plate_number(case.input), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_format_plate_number_idempotent() {
        let once = format_plate_number("XYZ 987");
        assert_eq!(format_plate_number(&once), once);
    }
}
