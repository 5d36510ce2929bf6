// Author: Dustin Pilgrim
// License: MIT

use std::rc::Rc;
use std::str::FromStr;

use scissors_core::{Point, Rect, RectRegistry, RenderStyle, SelectableRect, Surface};

use crate::damage::DamageTracker;
use crate::error::ScriptError;

/// One scripted interaction. Rect numbers are 1-based, matching the labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Press at `start`, release at `end`.
    Draw { start: Point, end: Point },
    Select(usize),
    Move { rect: usize, dx: i32, dy: i32 },
    /// Grab a corner box at `from` and drop it at `to`.
    Drag { rect: usize, from: Point, to: Point },
}

fn bad(step: &str, reason: impl Into<String>) -> ScriptError {
    ScriptError::BadStep {
        step: step.to_string(),
        reason: reason.into(),
    }
}

impl FromStr for Step {
    type Err = ScriptError;

    /// `draw:x,y,x2,y2` | `select:n` | `move:n,dx,dy` | `drag:n,x,y,x2,y2`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, args) = s.split_once(':').ok_or_else(|| bad(s, "expected kind:args"))?;

        let nums = args
            .split(',')
            .map(|n| n.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| bad(s, e.to_string()))?;

        let rect_no = |n: i32| -> Result<usize, ScriptError> {
            if n < 1 {
                return Err(bad(s, "rect numbers start at 1"));
            }
            Ok(n as usize)
        };

        match (kind.trim(), nums.as_slice()) {
            ("draw", &[x, y, x2, y2]) => Ok(Step::Draw {
                start: Point::new(x, y),
                end: Point::new(x2, y2),
            }),
            ("select", &[n]) => Ok(Step::Select(rect_no(n)?)),
            ("move", &[n, dx, dy]) => Ok(Step::Move {
                rect: rect_no(n)?,
                dx,
                dy,
            }),
            ("drag", &[n, x, y, x2, y2]) => Ok(Step::Drag {
                rect: rect_no(n)?,
                from: Point::new(x, y),
                to: Point::new(x2, y2),
            }),
            ("draw" | "select" | "move" | "drag", _) => Err(bad(s, "wrong number of arguments")),
            (other, _) => Err(bad(s, format!("unknown step kind \"{other}\""))),
        }
    }
}

/// A page of crop rects driven by scripted steps.
pub struct Scene {
    width: i32,
    height: i32,
    registry: Rc<RectRegistry>,
    rects: Vec<SelectableRect>,
    damage: Rc<DamageTracker>,
}

impl Scene {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            registry: Rc::new(RectRegistry::new()),
            rects: Vec::new(),
            damage: Rc::new(DamageTracker::new()),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn rects(&self) -> &[SelectableRect] {
        &self.rects
    }

    pub fn damage(&self) -> &DamageTracker {
        &self.damage
    }

    /// Applies `step`. Ok(false) means the step was valid but had no effect
    /// (rejected by the container or missed every corner box).
    pub fn apply(&mut self, step: &Step) -> Result<bool, ScriptError> {
        let (w, h) = (self.width, self.height);

        match *step {
            Step::Draw { start, end } => {
                let mut rect = SelectableRect::new(start, &self.registry);
                rect.add_listener(self.damage.clone());
                if !rect.resize(start, end, w, h) {
                    return Ok(false);
                }
                self.registry.push(rect.id());
                self.rects.push(rect);
                Ok(true)
            }

            Step::Select(n) => {
                let target = self.index(n)?;
                for (i, rect) in self.rects.iter_mut().enumerate() {
                    if i == target {
                        rect.set_selected(true);
                    } else if rect.is_selected() {
                        rect.set_selected(false);
                    }
                }
                Ok(true)
            }

            Step::Move { rect, dx, dy } => {
                let i = self.index(rect)?;
                Ok(self.rects[i].translate(dx, dy, w, h))
            }

            Step::Drag { rect, from, to } => {
                let i = self.index(rect)?;
                let target = &mut self.rects[i];
                match target.anchor_for_resize(from) {
                    Some(anchor) => Ok(target.resize(anchor, to, w, h)),
                    None => Ok(false),
                }
            }
        }
    }

    /// Draws every rect that touches `clip`, in numbering order.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, clip: Rect, style: &RenderStyle) {
        for rect in &self.rects {
            rect.render(surface, clip, style);
        }
    }

    fn index(&self, n: usize) -> Result<usize, ScriptError> {
        if n == 0 || n > self.rects.len() {
            return Err(ScriptError::NoSuchRect(n));
        }
        Ok(n - 1)
    }
}
