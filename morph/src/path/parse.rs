/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::path::*;
use crate::command::*;
use crate::error::*;
use crate::sub_path::*;

use flo_morph_curves::arc::*;
use flo_morph_curves::*;

use smallvec::*;

use std::mem;
use std::str::FromStr;

///
/// Reads the numbers and flags in path data
///
struct PathTokenizer<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> PathTokenizer<'a> {
    fn new(text: &'a str) -> PathTokenizer<'a> {
        PathTokenizer { text, pos: 0 }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    #[inline]
    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.text.as_bytes().get(self.pos + offset).copied()
    }

    fn skip_separators(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() || c == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    #[inline]
    fn at_number(&self) -> bool {
        matches!(self.peek(), Some(b'0'..=b'9') | Some(b'.') | Some(b'-') | Some(b'+'))
    }

    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }

        self.pos - start
    }

    ///
    /// Reads a number like '-1.5e3' or '.5'
    ///
    /// A number ends as soon as a character that can't continue it is found, so '1.5.5' is two numbers and
    /// '10-5' is 10 followed by -5.
    ///
    fn number(&mut self) -> Result<f64, ParseError> {
        let start = self.pos;

        if let Some(b'-') | Some(b'+') = self.peek() {
            self.pos += 1;
        }

        let mut num_digits = self.skip_digits();
        if let Some(b'.') = self.peek() {
            self.pos += 1;
            num_digits += self.skip_digits();
        }

        if num_digits == 0 {
            return Err(ParseError::new(ParseErrorKind::InvalidNumber, start));
        }

        // The exponent is only part of the number if it has some digits
        if let Some(b'e') | Some(b'E') = self.peek() {
            let exponent_digit = match self.peek_at(1) {
                Some(b'-') | Some(b'+') => 2,
                _ => 1,
            };

            if let Some(b'0'..=b'9') = self.peek_at(exponent_digit) {
                self.pos += exponent_digit;
                self.skip_digits();
            }
        }

        self.text[start..self.pos]
            .parse::<f64>()
            .map_err(|_| ParseError::new(ParseErrorKind::InvalidNumber, start))
    }

    ///
    /// Reads an arc flag, which is always a single '0' or '1' character
    ///
    fn flag(&mut self) -> Result<f64, ParseError> {
        let value = match self.peek() {
            Some(b'0') => 0.0,
            Some(b'1') => 1.0,
            _ => return Err(ParseError::new(ParseErrorKind::InvalidFlag, self.pos)),
        };

        self.pos += 1;
        Ok(value)
    }

    ///
    /// Reads all of the arguments following a command letter
    ///
    fn arguments(&mut self, letter: char) -> Result<SmallVec<[f64; 8]>, ParseError> {
        let is_arc = letter == 'A' || letter == 'a';
        let mut arguments = smallvec![];

        loop {
            self.skip_separators();
            if !self.at_number() {
                break;
            }

            let is_flag = is_arc && matches!(arguments.len() % 7, 3 | 4);
            arguments.push(if is_flag { self.flag()? } else { self.number()? });
        }

        Ok(arguments)
    }
}

///
/// Turns a series of path data commands into subpaths
///
struct SubPathBuilder {
    sub_paths: Vec<SubPath>,

    /// The commands of the subpath being built
    commands: Vec<Command>,

    current: Coord2,

    /// Where the current subpath started (and where a close command returns to)
    start: Coord2,

    /// The second control point of the previous command, if it was a cubic curve
    last_cubic_control: Option<Coord2>,

    /// The control point of the previous command, if it was a quadratic curve
    last_quad_control: Option<Coord2>,

    /// True once the first move command has been seen
    started: bool,
}

impl SubPathBuilder {
    fn new() -> SubPathBuilder {
        SubPathBuilder {
            sub_paths: vec![],
            commands: vec![],
            current: Coord2::origin(),
            start: Coord2::origin(),
            last_cubic_control: None,
            last_quad_control: None,
            started: false,
        }
    }

    ///
    /// Reads a coordinate from a pair of arguments
    ///
    #[inline]
    fn point(&self, args: &[f64], relative: bool) -> Coord2 {
        let point = Coord2(args[0], args[1]);

        if relative {
            self.current + point
        } else {
            point
        }
    }

    fn finish_sub_path(&mut self) {
        if !self.commands.is_empty() {
            let commands = mem::take(&mut self.commands);
            self.sub_paths.push(SubPath::from_commands(commands, false));
        }
    }

    ///
    /// Drawing commands that follow a close command start a new subpath at the same place as the closed one
    ///
    fn ensure_sub_path(&mut self, position: usize) -> Result<(), ParseError> {
        if !self.started {
            return Err(ParseError::new(ParseErrorKind::MissingMoveTo, position));
        }

        if self.commands.is_empty() {
            self.commands.push(Command::move_to(self.start, CommandId::new()));
        }

        Ok(())
    }

    fn push_command(&mut self, kind: CommandKind, points: SmallVec<[Coord2; 3]>) {
        self.commands.push(Command::with_id(kind, points, CommandId::new(), false));
    }

    fn move_to(&mut self, point: Coord2) {
        self.finish_sub_path();

        self.commands.push(Command::move_to(point, CommandId::new()));
        self.start = point;
        self.current = point;
        self.started = true;
        self.last_cubic_control = None;
        self.last_quad_control = None;
    }

    fn line_to(&mut self, point: Coord2, position: usize) -> Result<(), ParseError> {
        self.ensure_sub_path(position)?;

        self.push_command(CommandKind::Line, smallvec![point]);
        self.current = point;
        self.last_cubic_control = None;
        self.last_quad_control = None;

        Ok(())
    }

    fn quad_to(&mut self, control: Coord2, end: Coord2, position: usize) -> Result<(), ParseError> {
        self.ensure_sub_path(position)?;

        self.push_command(CommandKind::Quadratic, smallvec![control, end]);
        self.current = end;
        self.last_cubic_control = None;
        self.last_quad_control = Some(control);

        Ok(())
    }

    fn cubic_to(&mut self, control1: Coord2, control2: Coord2, end: Coord2, position: usize) -> Result<(), ParseError> {
        self.ensure_sub_path(position)?;

        self.push_command(CommandKind::Cubic, smallvec![control1, control2, end]);
        self.current = end;
        self.last_cubic_control = Some(control2);
        self.last_quad_control = None;

        Ok(())
    }

    fn arc_to(&mut self, args: &[f64], relative: bool, position: usize) -> Result<(), ParseError> {
        self.ensure_sub_path(position)?;

        let arc = SvgArc {
            start: self.current,
            radii: (args[0].abs(), args[1].abs()),
            x_axis_rotation: args[2],
            large_arc: args[3] != 0.0,
            sweep: args[4] != 0.0,
            end: self.point(&args[5..7], relative),
        };

        for segment in arc.to_segments() {
            self.commands.push(Command::from_segment(&segment, CommandId::new(), false));
        }

        self.current = arc.end;
        self.last_cubic_control = None;
        self.last_quad_control = None;

        Ok(())
    }

    fn close(&mut self, position: usize) -> Result<(), ParseError> {
        if !self.started {
            return Err(ParseError::new(ParseErrorKind::MissingMoveTo, position));
        }

        // A close directly after another close has nothing to close
        if !self.commands.is_empty() {
            self.push_command(CommandKind::Close, smallvec![]);
            self.finish_sub_path();
        }

        self.current = self.start;
        self.last_cubic_control = None;
        self.last_quad_control = None;

        Ok(())
    }

    ///
    /// The point a smooth curve uses as its first control point: the reflection of the previous control point
    ///
    #[inline]
    fn reflect(&self, control: Option<Coord2>) -> Coord2 {
        match control {
            Some(control) => self.current + (self.current - control),
            None => self.current,
        }
    }

    ///
    /// Processes a command and its arguments (which have already been checked to be a multiple of the command's arity)
    ///
    fn command(&mut self, letter: char, args: &[f64], position: usize) -> Result<(), ParseError> {
        let relative = letter.is_ascii_lowercase();

        match letter.to_ascii_uppercase() {
            'M' => {
                for (idx, pair) in args.chunks(2).enumerate() {
                    let point = self.point(pair, relative);

                    // Extra coordinates after a move are lines
                    if idx == 0 {
                        self.move_to(point);
                    } else {
                        self.line_to(point, position)?;
                    }
                }
            }

            'L' => {
                for pair in args.chunks(2) {
                    let point = self.point(pair, relative);
                    self.line_to(point, position)?;
                }
            }

            'H' => {
                for x in args.iter() {
                    let x = if relative { self.current.x() + x } else { *x };
                    self.line_to(Coord2(x, self.current.y()), position)?;
                }
            }

            'V' => {
                for y in args.iter() {
                    let y = if relative { self.current.y() + y } else { *y };
                    self.line_to(Coord2(self.current.x(), y), position)?;
                }
            }

            'C' => {
                for curve in args.chunks(6) {
                    let control1 = self.point(&curve[0..2], relative);
                    let control2 = self.point(&curve[2..4], relative);
                    let end = self.point(&curve[4..6], relative);

                    self.cubic_to(control1, control2, end, position)?;
                }
            }

            'S' => {
                for curve in args.chunks(4) {
                    let control1 = self.reflect(self.last_cubic_control);
                    let control2 = self.point(&curve[0..2], relative);
                    let end = self.point(&curve[2..4], relative);

                    self.cubic_to(control1, control2, end, position)?;
                }
            }

            'Q' => {
                for curve in args.chunks(4) {
                    let control = self.point(&curve[0..2], relative);
                    let end = self.point(&curve[2..4], relative);

                    self.quad_to(control, end, position)?;
                }
            }

            'T' => {
                for curve in args.chunks(2) {
                    let control = self.reflect(self.last_quad_control);
                    let end = self.point(curve, relative);

                    self.quad_to(control, end, position)?;
                }
            }

            'A' => {
                for arc in args.chunks(7) {
                    self.arc_to(arc, relative, position)?;
                }
            }

            'Z' => self.close(position)?,

            _ => return Err(ParseError::new(ParseErrorKind::UnknownCommand(letter), position)),
        }

        Ok(())
    }

    fn finish(mut self) -> Vec<SubPath> {
        self.finish_sub_path();
        self.sub_paths
    }
}

///
/// The number of arguments taken by each repetition of a command
///
fn command_arity(letter: char) -> Option<usize> {
    match letter.to_ascii_uppercase() {
        'M' | 'L' | 'T' => Some(2),
        'H' | 'V' => Some(1),
        'S' | 'Q' => Some(4),
        'C' => Some(6),
        'A' => Some(7),
        'Z' => Some(0),
        _ => None,
    }
}

///
/// Parses path data into a list of subpaths
///
pub(crate) fn parse_sub_paths(text: &str) -> Result<Vec<SubPath>, ParseError> {
    let mut tokenizer = PathTokenizer::new(text);
    let mut builder = SubPathBuilder::new();

    loop {
        tokenizer.skip_separators();

        let position = tokenizer.pos;
        let letter = match tokenizer.text[position..].chars().next() {
            None => break,
            Some(letter) => letter,
        };

        let arity = match command_arity(letter) {
            Some(arity) => arity,
            None if tokenizer.at_number() && !builder.started => {
                return Err(ParseError::new(ParseErrorKind::MissingMoveTo, position))
            }
            None => return Err(ParseError::new(ParseErrorKind::UnknownCommand(letter), position)),
        };

        tokenizer.pos += letter.len_utf8();
        let args = tokenizer.arguments(letter)?;

        let count_ok = if arity == 0 {
            args.is_empty()
        } else {
            !args.is_empty() && args.len() % arity == 0
        };

        if !count_ok {
            return Err(ParseError::new(
                ParseErrorKind::WrongArgumentCount {
                    command: letter,
                    count: args.len(),
                },
                position,
            ));
        }

        builder.command(letter, &args, position)?;
    }

    Ok(builder.finish())
}

impl Path {
    ///
    /// Reads a path from path data, like 'M 0 0 L 10 10 Z'
    ///
    /// Every command of the path data format is accepted: relative commands are made absolute, horizontal and
    /// vertical lines become lines, smooth curves get explicit control points and arcs are converted to cubic
    /// curves. Empty path data produces an empty path.
    ///
    pub fn parse(text: &str) -> Result<Path, PathError> {
        Ok(Path::from_sub_paths(parse_sub_paths(text)?))
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(text: &str) -> Result<Path, PathError> {
        Path::parse(text)
    }
}
