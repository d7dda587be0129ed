use crate::types::{Command, MotionProgram, Script};
use serde::{Deserialize, Serialize};

/// Target vocabulary for the rendered script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// Plain plotter calls: `turn_right(90)`, `forward(10)`, `pen_down()`.
    #[default]
    Plotter,
    /// A runnable Python `turtle` program.
    PythonTurtle,
}

impl Dialect {
    fn preamble(self) -> &'static [&'static str] {
        match self {
            Dialect::Plotter => &["init()", "pen_up()"],
            Dialect::PythonTurtle => &["import turtle", "turtle = turtle.Turtle()", "turtle.penup()"],
        }
    }

    fn postamble(self) -> &'static [&'static str] {
        match self {
            Dialect::Plotter => &["hide()", "done()"],
            Dialect::PythonTurtle => &["turtle.hideturtle()", "turtle.done()"],
        }
    }

    /// Render a single command.
    pub fn render(self, command: &Command) -> String {
        match self {
            Dialect::Plotter => match command {
                Command::SetFillColor(color) => format!("set_fill_color(\"{}\")", color),
                Command::TurnRight(angle) => format!("turn_right({})", angle),
                Command::TurnLeft(angle) => format!("turn_left({})", angle),
                Command::Forward(distance) => format!("forward({})", distance),
                Command::PenDown => "pen_down()".to_string(),
                Command::PenUp => "pen_up()".to_string(),
                Command::BeginFill => "begin_fill()".to_string(),
                Command::EndFill => "end_fill()".to_string(),
            },
            Dialect::PythonTurtle => match command {
                Command::SetFillColor(color) => format!("turtle.fillcolor(\"{}\")", color),
                Command::TurnRight(angle) => format!("turtle.right({})", angle),
                Command::TurnLeft(angle) => format!("turtle.left({})", angle),
                Command::Forward(distance) => format!("turtle.forward({})", distance),
                Command::PenDown => "turtle.pendown()".to_string(),
                Command::PenUp => "turtle.penup()".to_string(),
                Command::BeginFill => "turtle.begin_fill()".to_string(),
                Command::EndFill => "turtle.end_fill()".to_string(),
            },
        }
    }
}

/// Convert a motion program to a script in the given dialect.
pub fn post_process(program: &MotionProgram, dialect: Dialect) -> Script {
    let mut lines: Vec<String> = dialect.preamble().iter().map(|l| l.to_string()).collect();

    for command in &program.commands {
        lines.push(dialect.render(command));
    }

    lines.extend(dialect.postamble().iter().map(|l| l.to_string()));

    Script { lines }
}
