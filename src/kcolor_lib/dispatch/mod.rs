/*!
Dispatches from a search.

A [Driver](crate::procedures::search::Driver) may be given a [Dispatcher], which is called with a [Dispatch] at each step of a search.
This allows a front end to report progress without the driver knowing how progress is shown.

For example, `color_solve` prints each dispatch as a line of progress:

```rust,ignore
driver.with_dispatcher(Box::new(|dispatch| match dispatch {
    Dispatch::Encoding { k, formula } => println!("Generating CNF with k={k} into '{}'...", formula.display()),
    _ => {}
}));
```
*/

use std::path::PathBuf;

use crate::{procedures::search::SearchRange, structures::verdict::Status};

pub type Dispatcher = Box<dyn Fn(Dispatch)>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The range of k to be searched, sent once before any attempt.
    Range(SearchRange),

    /// The encoder is about to be called for `k`, with the formula to be placed at `formula`.
    Encoding { k: usize, formula: PathBuf },

    /// The solver is about to be called on the formula for `k`.
    Solving { k: usize, formula: PathBuf },

    /// The attempt at `k` has concluded.
    Verdict { k: usize, status: Status },
}

impl std::fmt::Display for Dispatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Range(range) => write!(f, "Searching {range}"),
            Self::Encoding { k, formula } => write!(f, "Encoding k={k} to {}", formula.display()),
            Self::Solving { k, formula } => write!(f, "Solving {} for k={k}", formula.display()),
            Self::Verdict { k, status } => write!(f, "k={k}: {status}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::procedures::search::KRequest;

    #[test]
    fn display() {
        let range = SearchRange::new(KRequest::Ascending, 4);
        assert_eq!(Dispatch::Range(range).to_string(), "Searching k in [2, 4]");
        assert_eq!(
            Dispatch::Encoding {
                k: 3,
                formula: PathBuf::from("cnf/g_3.cnf")
            }
            .to_string(),
            "Encoding k=3 to cnf/g_3.cnf"
        );
        assert_eq!(
            Dispatch::Verdict {
                k: 3,
                status: Status::Satisfiable
            }
            .to_string(),
            "k=3: SATISFIABLE"
        );
    }
}
