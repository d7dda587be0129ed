use crate::geometry::Contour;
use crate::outline::Outline;
use crate::types::{Command, MotionProgram, PlotterState};
use kurbo::Point;
use log::debug;
use serde::{Deserialize, Serialize};

/// Fill colors used for solid contours and for holes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub fill: String,
    /// Background color painted over an ancestor's fill to fake a hole.
    pub hole: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fill: "red".to_string(),
            hole: "white".to_string(),
        }
    }
}

impl Palette {
    pub fn color_for(&self, contour: &Contour) -> &str {
        if contour.is_hole {
            &self.hole
        } else {
            &self.fill
        }
    }
}

/// One turn+forward move and the state it leaves the plotter in.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    /// `None` when the target is straight ahead.
    pub turn: Option<Command>,
    pub distance: f64,
    pub state: PlotterState,
}

impl Leg {
    pub fn write_into(&self, out: &mut Vec<Command>) {
        if let Some(turn) = &self.turn {
            out.push(turn.clone());
        }
        out.push(Command::Forward(self.distance));
    }
}

/// Signed turn in degrees from `current_deg` to `target_deg` along the shorter
/// direction. Positive values are right turns, negative values left turns.
pub fn shortest_turn(current_deg: f64, target_deg: f64) -> f64 {
    let diff = target_deg - current_deg;
    let magnitude = diff.abs() % 360.0;
    let magnitude = if magnitude > 180.0 {
        360.0 - magnitude
    } else {
        magnitude
    };

    if (0.0..=180.0).contains(&diff) || (-360.0..=-180.0).contains(&diff) {
        magnitude
    } else {
        -magnitude
    }
}

/// Plan the move from `state` to `target`.
pub fn turn_towards(state: PlotterState, target: Point) -> Leg {
    let delta = target - state.position;
    let distance = delta.hypot();
    let heading = delta.y.atan2(delta.x);

    let turn = shortest_turn(state.heading.to_degrees(), heading.to_degrees());
    let turn = if turn > 0.0 {
        Some(Command::TurnRight(turn))
    } else if turn < 0.0 {
        Some(Command::TurnLeft(-turn))
    } else {
        None
    };

    Leg {
        turn,
        distance,
        state: PlotterState {
            heading,
            position: target,
        },
    }
}

fn leg_to(state: PlotterState, target: Point, out: &mut Vec<Command>) -> PlotterState {
    let leg = turn_towards(state, target);
    leg.write_into(out);
    leg.state
}

/// Emit the commands that fill one contour and return the resulting state.
///
/// Empty contours emit nothing and leave the state untouched. The pen is
/// expected to be up on entry and is up again on exit.
pub fn emit_contour(contour: &Contour, state: PlotterState, out: &mut Vec<Command>) -> PlotterState {
    if contour.is_empty() {
        return state;
    }

    // Travel leg with the pen still up.
    let mut state = leg_to(state, contour.start, out);

    out.push(Command::PenDown);
    out.push(Command::BeginFill);

    for point in &contour.points {
        state = leg_to(state, *point, out);
    }
    state = leg_to(state, contour.start, out);

    out.push(Command::EndFill);
    out.push(Command::PenUp);

    state
}

/// Emit every drawable contour in order, each preceded by its fill color.
pub fn emit_outline(outline: &Outline, palette: &Palette) -> MotionProgram {
    let mut commands = Vec::new();
    let mut state = PlotterState::home();

    for contour in outline.drawable() {
        commands.push(Command::SetFillColor(palette.color_for(contour).to_string()));
        state = emit_contour(contour, state, &mut commands);
    }

    debug!(
        "emitted {} commands for {} drawable contours",
        commands.len(),
        outline.drawable().count()
    );

    MotionProgram { commands }
}
