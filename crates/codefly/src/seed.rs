//! # Example Data
//!
//! [`Repository::set_up_example`] populates a fresh store with three
//! accounts, a fixed list of questions and sample solutions for Amy and Bob.
//!
//! Accounts are only seeded when no account exists; questions and solutions
//! only when `Q1` is absent. The two checks are independent, so a store with
//! accounts but no `Q1` still gets questions.

use crate::error::Result;
use crate::model::SeedReport;
use crate::repository::Repository;
use crate::store::backend::StorageBackend;
use log::{info, warn};

pub const EXAMPLE_ACCOUNTS: [(&str, &str); 3] =
    [("Amy", "123456"), ("Bob", "000000"), ("John", "246135")];

/// (description, hint code, test) for each example question.
pub const EXAMPLE_QUESTIONS: [(&str, &str, &str); 3] = [
    (
        "Add One\n\
         Easy\n\
         Implement addOne so that it returns its argument plus one.\n\
         Example: addOne(1) returns 2.",
        "public class Solution {\n\
         \x20   public int addOne(int i) {\n\
         \x20       return 0;\n\
         \x20   }\n\
         }",
        "public class Test {\n\
         \x20   public static void main(String[] args) {\n\
         \x20       Solution s = new Solution();\n\
         \x20       if (s.addOne(1) != 2) throw new AssertionError(\"addOne(1) should be 2\");\n\
         \x20       if (s.addOne(-1) != 0) throw new AssertionError(\"addOne(-1) should be 0\");\n\
         \x20       System.out.println(\"All tests passed\");\n\
         \x20   }\n\
         }",
    ),
    (
        "Add Two\n\
         Easy\n\
         Implement addTwo so that it returns its argument plus two.\n\
         Example: addTwo(1) returns 3.",
        "public class Solution {\n\
         \x20   public int addTwo(int i) {\n\
         \x20       return 0;\n\
         \x20   }\n\
         }",
        "public class Test {\n\
         \x20   public static void main(String[] args) {\n\
         \x20       Solution s = new Solution();\n\
         \x20       if (s.addTwo(1) != 3) throw new AssertionError(\"addTwo(1) should be 3\");\n\
         \x20       if (s.addTwo(-2) != 0) throw new AssertionError(\"addTwo(-2) should be 0\");\n\
         \x20       System.out.println(\"All tests passed\");\n\
         \x20   }\n\
         }",
    ),
    (
        "Reverse String\n\
         Medium\n\
         Implement reverse so that it returns the characters of s in reverse order.\n\
         Example: reverse(\"abc\") returns \"cba\".",
        "public class Solution {\n\
         \x20   public String reverse(String s) {\n\
         \x20       return s;\n\
         \x20   }\n\
         }",
        "public class Test {\n\
         \x20   public static void main(String[] args) {\n\
         \x20       Solution s = new Solution();\n\
         \x20       if (!s.reverse(\"abc\").equals(\"cba\")) throw new AssertionError(\"reverse(abc) should be cba\");\n\
         \x20       if (!s.reverse(\"\").equals(\"\")) throw new AssertionError(\"reverse of empty should be empty\");\n\
         \x20       System.out.println(\"All tests passed\");\n\
         \x20   }\n\
         }",
    ),
];

const Q1_AMY: &str = "public class Solution {\n\
    \x20   public int addOne(int i) {\n\
    \x20       System.out.println(\"Amy code's q1 standard output\");\n\
    \x20       return i + 1;\n\
    \x20   }\n\
    }";

const Q1_BOB: &str = "public class Solution {\n\
    \x20   public int addOne(int i) {\n\
    \x20       System.out.println(\"Bob code's q1 standard output\");\n\
    \x20       return i + 2;\n\
    \x20   }\n\
    }";

const Q2_AMY: &str = "public class Solution {\n\
    \x20   public int addTwo(int i) {\n\
    \x20       int a = 0;\n\
    \x20       System.out.println(\"Amy's q2 stdout\");\n\
    \x20       return i + 2;\n\
    \x20   }\n\
    }";

// Divides by zero on purpose, to exercise runtime failures in graders.
const Q2_BOB: &str = "public class Solution {\n\
    \x20   public int addTwo(int i) {\n\
    \x20       int a = 0;\n\
    \x20       a = i/a;\n\
    \x20       return i + 2;\n\
    \x20   }\n\
    }";

impl<B: StorageBackend> Repository<B> {
    /// Seeds example accounts, questions and solutions into an empty store.
    pub fn set_up_example(&mut self) -> Result<SeedReport> {
        let mut report = SeedReport::default();

        if self.credentials().is_empty() {
            for (username, password) in EXAMPLE_ACCOUNTS {
                self.add_user_account(username, password)?;
                report.accounts_added += 1;
            }
        }

        if self.question_dir_exists(1) {
            warn!("Q1 already exists, not seeding example questions");
            return Ok(report);
        }

        let mut ids = Vec::with_capacity(EXAMPLE_QUESTIONS.len());
        for (description, hint, test) in EXAMPLE_QUESTIONS {
            ids.push(self.add_question(description, hint, test)?);
            report.questions_added += 1;
        }

        let (add_one, add_two) = (ids[0], ids[1]);
        let solutions = [
            (add_one, "Bob", Q1_BOB),
            (add_two, "Bob", Q2_BOB),
            (add_one, "Amy", Q1_AMY),
            (add_two, "Amy", Q2_AMY),
        ];
        for (id, username, code) in solutions {
            self.write_user_code(id, username, code)?;
            report.solutions_written += 1;
        }

        info!(
            "seeded {} accounts, {} questions, {} solutions",
            report.accounts_added, report.questions_added, report.solutions_written
        );
        Ok(report)
    }
}
