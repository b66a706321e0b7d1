use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::{
    error::{PreconditionError, Result},
    gameboard::Maze,
};

/// Colours and scale of the SVG picture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgStyle {
    /// Rough size of the longer side in pixels, regardless of the maze size.
    pub max_resolution: f64,
    pub wall_colour: String,
    pub passage_colour: String,
    pub path_colour: String,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            max_resolution: 500.0,
            wall_colour: "black".to_string(),
            passage_colour: "white".to_string(),
            path_colour: "red".to_string(),
        }
    }
}

impl SvgStyle {
    pub fn magnification(&self, maze: &Maze) -> f64 {
        let longest = (maze.width() - 1).max(maze.height() - 1).max(1);
        self.max_resolution / longest as f64
    }
}

/// Draws every passage as a line over a wall coloured background.
pub fn write_svg<W: Write>(maze: &mut Maze, mut out: W, style: &SvgStyle) -> Result<()> {
    if !maze.is_initialized() {
        return Err(PreconditionError::Uninitialized.into());
    }

    let mag = style.magnification(maze);
    let (width, height) = (maze.width() as f64, maze.height() as f64);

    writeln!(
        out,
        r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
        ((width - 1.0) * mag).floor(),
        ((height - 1.0) * mag).floor(),
    )?;
    writeln!(
        out,
        r#"<rect width="{}" height="{}" style="fill:{}" />"#,
        width * mag,
        height * mag,
        style.wall_colour,
    )?;

    let edges = maze.undirected_edges();
    for edge in &edges {
        let Some(to) = edge.to else {
            continue;
        };
        let colour = if edge.on_path {
            &style.path_colour
        } else {
            &style.passage_colour
        };
        writeln!(
            out,
            r#"<line stroke="{}" x1="{}" x2="{}" y1="{}" y2="{}" stroke-width="{}" />"#,
            colour,
            edge.from.0 as f64 * mag,
            to.0 as f64 * mag,
            edge.from.1 as f64 * mag,
            to.1 as f64 * mag,
            mag / 2.0,
        )?;
    }

    writeln!(out, "</svg>")?;
    out.flush()?;

    log::debug!("wrote svg with {} lines at {mag}x", edges.len());
    Ok(())
}
