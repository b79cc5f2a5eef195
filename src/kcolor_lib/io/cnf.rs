//! Writing the k-colorability of a graph as a DIMACS CNF formula.
//!
//! For a graph with n vertices and m edges, and k colors, the atom `(v - 1) * k + c` stands for vertex `v` having color `c`.
//! The formula is made of:
//! 1. For each vertex, a clause requiring at least one color: n clauses.
//! 2. For each vertex and each pair of colors, a clause forbidding both: n * k(k-1)/2 clauses.
//! 3. For each edge and each color, a clause forbidding both endpoints from having the color: m * k clauses.

use std::io::Write;

use crate::structures::graph::Graph;

pub struct ColoringCnf<'g> {
    graph: &'g Graph,
    k: usize,
    atoms: usize,
    clauses: usize,
}

impl<'g> ColoringCnf<'g> {
    /// The formula for `graph` with `k` colors, or `None` if the count of atoms or clauses is not representable.
    pub fn new(graph: &'g Graph, k: usize) -> Option<Self> {
        let n = graph.vertex_count();
        let m = graph.edge_count();

        let atoms = n.checked_mul(k)?;
        let pairs = match k % 2 {
            0 => (k / 2).checked_mul(k.saturating_sub(1))?,
            _ => k.checked_mul(k / 2)?,
        };
        let clauses = n
            .checked_mul(pairs)?
            .checked_add(n)?
            .checked_add(m.checked_mul(k)?)?;

        Some(ColoringCnf {
            graph,
            k,
            atoms,
            clauses,
        })
    }

    /// The atom for (1-indexed) `vertex` having (1-indexed) `color`.
    ///
    /// At most the atom count, for a vertex of the graph and a color up to k.
    pub fn atom(&self, vertex: usize, color: usize) -> usize {
        (vertex - 1) * self.k + color
    }

    pub fn atom_count(&self) -> usize {
        self.atoms
    }

    pub fn clause_count(&self) -> usize {
        self.clauses
    }

    pub fn write(&self, mut out: impl Write) -> std::io::Result<()> {
        let n = self.graph.vertex_count();
        let k = self.k;

        writeln!(
            out,
            "c CNF: {k}-coloring of {n} vertices, {} edges",
            self.graph.edge_count()
        )?;
        writeln!(out, "p cnf {} {}", self.atom_count(), self.clause_count())?;

        for vertex in 1..=n {
            for color in 1..=k {
                write!(out, "{} ", self.atom(vertex, color))?;
            }
            writeln!(out, "0")?;
        }

        for vertex in 1..=n {
            for i in 1..=k {
                for j in (i + 1)..=k {
                    writeln!(out, "-{} -{} 0", self.atom(vertex, i), self.atom(vertex, j))?;
                }
            }
        }

        for (u, v) in self.graph.edges() {
            for color in 1..=k {
                writeln!(out, "-{} -{} 0", self.atom(u, color), self.atom(v, color))?;
            }
        }

        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_edge_two_colors() {
        let mut graph = Graph::new(2, 1);
        graph.add_edge(1, 2);
        let cnf = ColoringCnf::new(&graph, 2).expect("counts");

        let mut buffer = Vec::default();
        assert!(cnf.write(&mut buffer).is_ok());
        let text = String::from_utf8(buffer).expect("utf8");

        assert_eq!(
            text,
            "c CNF: 2-coloring of 2 vertices, 1 edges
p cnf 4 6
1 2 0
3 4 0
-1 -2 0
-3 -4 0
-1 -3 0
-2 -4 0
"
        );
    }

    #[test]
    fn counts() {
        let mut graph = Graph::new(4, 5);
        for (u, v) in [(1, 2), (2, 3), (3, 4), (4, 1), (1, 3)] {
            graph.add_edge(u, v);
        }
        let cnf = ColoringCnf::new(&graph, 3).expect("counts");
        assert_eq!(cnf.atom_count(), 12);
        // 4 + 4 * 3 + 5 * 3
        assert_eq!(cnf.clause_count(), 31);
        assert_eq!(cnf.atom(3, 2), 8);

        let mut buffer = Vec::default();
        assert!(cnf.write(&mut buffer).is_ok());
        let clauses = String::from_utf8(buffer)
            .expect("utf8")
            .lines()
            .filter(|line| !line.starts_with('c') && !line.starts_with('p'))
            .count();
        assert_eq!(clauses, 31);
    }

    #[test]
    fn unrepresentable_counts() {
        let mut graph = Graph::new(2, 1);
        graph.add_edge(1, 2);

        assert!(ColoringCnf::new(&graph, usize::MAX).is_none());
        // k(k-1)/2 overflows before n * k does.
        assert!(ColoringCnf::new(&graph, 1 << (usize::BITS / 2 + 1)).is_none());
        assert!(ColoringCnf::new(&graph, 1 << (usize::BITS / 2 - 2)).is_some());
    }
}
