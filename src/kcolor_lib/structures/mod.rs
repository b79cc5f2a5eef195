/*!
Abstract elements of a search.

- A [graph](graph) is read once, and does not change during a search.
- A [verdict](verdict) is made by a solver for each k attempted.
- A [coloring](coloring) may be read from the assignment of a satisfiable verdict.
*/

pub mod coloring;
pub mod graph;
pub mod verdict;
