//! Default values, for both configuration and the conventions of the external tools.

pub const ENCODER_PATH: &str = "./color2sat";
pub const KISSAT_PATH: &str = "./kissat";
pub const MINISAT_PATH: &str = "./minisat";

pub const CNF_DIR: &str = "cnf";
pub const SOL_DIR: &str = "sol";

/// The graph source which stands for standard input.
pub const STDIN_MARKER: &str = "-";

/// The stem used to name artifacts of a graph read from standard input.
pub const STDIN_STEM: &str = "stdin";

/// The least k searched, as 1-colorability is degenerate.
pub const MIN_K: usize = 2;

// Solver exit codes
pub const SATISFIABLE_EXIT: i32 = 10;
pub const UNSATISFIABLE_EXIT: i32 = 20;
pub const UNKNOWN_EXIT: i32 = 0;

/// The first line of a minisat result file for a satisfiable formula.
pub const SAT_MARKER: &str = "SAT";
pub const UNSAT_MARKER: &str = "UNSAT";

// Exit codes of the search driver
pub const EXIT_FOUND: i32 = 0;
pub const EXIT_EXHAUSTED: i32 = 1;
pub const EXIT_FATAL: i32 = 2;
