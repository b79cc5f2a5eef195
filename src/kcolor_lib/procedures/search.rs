/*!
The search for the smallest k for which a graph is k-colorable.

# Overview

For each k in a [SearchRange], in increasing order:
1. The graph is encoded as a formula by an [Encoder].
2. The formula is given to a [Solver], and the [Verdict] of the solver is read.
3. If the verdict is satisfiable the search stops with k and the assignment.
   Otherwise, the search moves on to the next k.

If no k in the range is satisfiable the search is exhausted, and the upper bound of the range is noted in the [SearchOutcome].

Failure of an encoder stops the search with an error, unless the driver is set to [skip](Driver::skip_encoder_failures) encoder failures.
In which case the failure is noted as an [attempt](Attempt) and the search moves on.

Files for each attempt are placed according to the [ArtifactPlan] of the driver, and scratch files are removed at the end of each attempt, whether or not the attempt succeeded.

# Example

```rust,ignore
let mut driver = Driver::new(encoder, solver, ArtifactPlan::Scratch);
let report = driver.search(&graph, KRequest::Ascending)?;
match report.outcome {
    SearchOutcome::Found { k, .. } => println!("k = {k}"),
    SearchOutcome::Exhausted { upper } => println!("UNSAT for all k up to {upper}"),
}
```
*/

use serde::Serialize;

use crate::{
    config::defaults,
    dispatch::{Dispatch, Dispatcher},
    io::{artifacts::ArtifactPlan, dimacs::GraphInput},
    misc::log::targets,
    procedures::{encode::Encoder, solve::Solver},
    structures::verdict::{Assignment, Status, Verdict},
    types::err::{ErrorKind, ToolError},
};

/// Which k to try.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KRequest {
    /// Only the given k, raised to 2 if lower.
    Fixed(usize),

    /// Each k from 2 to the number of vertices.
    Ascending,
}

/// An inclusive range of k, which is empty if `lo` exceeds `hi`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SearchRange {
    pub lo: usize,
    pub hi: usize,
}

impl SearchRange {
    pub fn new(request: KRequest, vertices: usize) -> Self {
        match request {
            KRequest::Fixed(k) => {
                let k = std::cmp::max(defaults::MIN_K, k);
                SearchRange { lo: k, hi: k }
            }
            KRequest::Ascending => SearchRange {
                lo: defaults::MIN_K,
                hi: vertices,
            },
        }
    }

    pub fn iter(&self) -> std::ops::RangeInclusive<usize> {
        self.lo..=self.hi
    }

    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }
}

impl std::fmt::Display for SearchRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "k in [{}, {}]", self.lo, self.hi)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Attempt {
    pub k: usize,
    pub status: Status,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "outcome")]
pub enum SearchOutcome {
    /// The smallest k in the range found to be satisfiable, with the assignment of the solver.
    Found { k: usize, assignment: Assignment },

    /// No k in the range was found satisfiable.
    Exhausted { upper: usize },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub range: SearchRange,

    /// Each attempt made, in the order made.
    pub attempts: Vec<Attempt>,

    pub outcome: SearchOutcome,
}

impl SearchReport {
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found { .. })
    }
}

/// Drives a search with some encoder and solver.
pub struct Driver<E: Encoder, S: Solver> {
    encoder: E,
    solver: S,
    plan: ArtifactPlan,
    skip_encoder_failures: bool,
    dispatcher: Option<Dispatcher>,
}

impl<E: Encoder, S: Solver> Driver<E, S> {
    pub fn new(encoder: E, solver: S, plan: ArtifactPlan) -> Self {
        Driver {
            encoder,
            solver,
            plan,
            skip_encoder_failures: false,
            dispatcher: None,
        }
    }

    /// Whether an encoder failure ends the search (the default) or is skipped.
    pub fn skip_encoder_failures(mut self, skip: bool) -> Self {
        self.skip_encoder_failures = skip;
        self
    }

    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    fn dispatch(&self, dispatch: Dispatch) {
        log::trace!(target: targets::SEARCH, "{dispatch}");
        if let Some(dispatcher) = &self.dispatcher {
            dispatcher(dispatch);
        }
    }

    /// Searches for the smallest k in the range given by `request` for which `graph` is k-colorable.
    pub fn search(
        &mut self,
        graph: &GraphInput,
        request: KRequest,
    ) -> Result<SearchReport, ErrorKind> {
        let range = SearchRange::new(request, graph.graph().vertex_count());
        log::info!(target: targets::SEARCH, "Search of {} over {range}", graph.origin());
        self.dispatch(Dispatch::Range(range));

        let stem = graph.stem();
        let mut attempts = Vec::default();

        for k in range.iter() {
            // Dropped at the end of each iteration, and so any scratch files are removed on every path out of the loop.
            let artifacts = self.plan.for_k(&stem, k)?;

            self.dispatch(Dispatch::Encoding {
                k,
                formula: artifacts.formula().to_path_buf(),
            });

            let formula = match self.encoder.encode(graph, k) {
                Ok(formula) => formula,

                Err(ErrorKind::Tool(ToolError::EncoderFailure { code, stderr, .. }))
                    if self.skip_encoder_failures =>
                {
                    log::warn!(target: targets::ENCODER, "Encoder failed for k={k}, skipping: {}", stderr.trim_end());
                    let status = Status::EncoderFailed { code };
                    self.dispatch(Dispatch::Verdict { k, status });
                    attempts.push(Attempt { k, status });
                    continue;
                }

                Err(e) => return Err(e),
            };

            match formula.is_empty() {
                true => log::warn!(target: targets::ENCODER, "Empty formula for k={k}"),
                false => log::debug!(target: targets::ENCODER, "Formula for k={k}: {} bytes", formula.len()),
            }

            self.dispatch(Dispatch::Solving {
                k,
                formula: artifacts.formula().to_path_buf(),
            });

            let verdict = self.solver.solve(&formula, &artifacts)?;
            let status = verdict.status();
            log::info!(target: targets::SEARCH, "k={k}: {status}");
            self.dispatch(Dispatch::Verdict { k, status });
            attempts.push(Attempt { k, status });

            if let Verdict::Satisfiable(assignment) = verdict {
                return Ok(SearchReport {
                    range,
                    attempts,
                    outcome: SearchOutcome::Found { k, assignment },
                });
            }
        }

        log::info!(target: targets::SEARCH, "No k in {range} is satisfiable");
        Ok(SearchReport {
            range,
            attempts,
            outcome: SearchOutcome::Exhausted { upper: range.hi },
        })
    }
}
