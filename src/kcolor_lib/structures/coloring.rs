//! Colorings read back from a satisfying assignment.
//!
//! Assignments are read with the variable layout of [ColoringCnf](crate::io::cnf::ColoringCnf), so the variable for vertex `v` and color `c` is `(v - 1) * k + c`.
//! An encoder with some other layout will (most likely) lead to a [ColoringError].

use serde::Serialize;

use crate::{
    structures::{graph::Graph, verdict::Assignment},
    types::err::ColoringError,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Coloring {
    k: usize,

    /// The color of each vertex, indexed from vertex 1.
    colors: Vec<usize>,
}

impl Coloring {
    /// Reads a coloring of `vertices` vertices with `k` colors from the positive literals of `assignment`.
    pub fn decode(
        assignment: &Assignment,
        vertices: usize,
        k: usize,
    ) -> Result<Self, ColoringError> {
        let mut colors: Vec<Option<usize>> = vec![None; vertices];

        for literal in assignment.literals() {
            if literal < 0 {
                continue;
            }
            let variable = literal as usize;
            if k == 0 || variable > vertices * k {
                return Err(ColoringError::VariableOutOfRange(variable));
            }

            let vertex = (variable - 1) / k;
            let color = (variable - 1) % k + 1;
            match colors[vertex] {
                Some(first) => {
                    return Err(ColoringError::MultipleColors {
                        vertex: vertex + 1,
                        first,
                        second: color,
                    })
                }
                None => colors[vertex] = Some(color),
            }
        }

        let colors = colors
            .into_iter()
            .enumerate()
            .map(|(index, color)| color.ok_or(ColoringError::Uncolored(index + 1)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Coloring { k, colors })
    }

    /// Checks no edge of `graph` joins two vertices of the same color.
    pub fn verify(&self, graph: &Graph) -> Result<(), ColoringError> {
        for (u, v) in graph.edges() {
            match (self.color(u), self.color(v)) {
                (Some(cu), Some(cv)) if cu == cv => {
                    return Err(ColoringError::Conflict { u, v, color: cu })
                }
                (None, _) => return Err(ColoringError::Uncolored(u)),
                (_, None) => return Err(ColoringError::Uncolored(v)),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn color(&self, vertex: usize) -> Option<usize> {
        vertex
            .checked_sub(1)
            .and_then(|index| self.colors.get(index))
            .copied()
    }

    /// Pairs of (vertex, color), from vertex 1.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(|(index, color)| (index + 1, *color))
    }
}
