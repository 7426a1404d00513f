// Walkthrough runner
//
// Sequences the passing-semantics operations and narrates what the caller sees
// before and after each call. Output goes to any `Write`, stdout in the binary
// and a byte buffer in tests.

use crate::config::Scenario;
use crate::error::{DemoError, Result};
use crate::mapping::{swap_entries, try_swap_entries};
use crate::pointer::{Pointer, UNBOUND};
use crate::record::{level_up_by_reference, level_up_by_value};
use crate::scalar::{swap_by_reference, swap_by_return, swap_by_value};
use crate::sequence::swap_first_two;
use colored::{Color, Colorize};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Display};
use std::io::Write;
use std::str::FromStr;

// ============================================================================
// Demo catalogue
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Demo {
    Pointers,
    SwapNaive,
    SwapByReturn,
    SwapByReference,
    Slice,
    Map,
    LevelUpNaive,
    LevelUpByReference,
}

impl Demo {
    pub const ALL: [Demo; 8] = [
        Demo::Pointers,
        Demo::SwapNaive,
        Demo::SwapByReturn,
        Demo::SwapByReference,
        Demo::Slice,
        Demo::Map,
        Demo::LevelUpNaive,
        Demo::LevelUpByReference,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Demo::Pointers => "pointers",
            Demo::SwapNaive => "swap-naive",
            Demo::SwapByReturn => "swap-by-return",
            Demo::SwapByReference => "swap-by-reference",
            Demo::Slice => "slice",
            Demo::Map => "map",
            Demo::LevelUpNaive => "level-up-naive",
            Demo::LevelUpByReference => "level-up-by-reference",
        }
    }

    /// One line on how the argument is passed and what the caller gets to see.
    pub fn summary(self) -> &'static str {
        match self {
            Demo::Pointers => "a reference is a value: address, dereference, unbound",
            Demo::SwapNaive => "scalars by value: caller sees no change",
            Demo::SwapByReturn => "scalars by value, returned: caller reassigns",
            Demo::SwapByReference => "scalars by &mut: swapped in place",
            Demo::Slice => "&mut [T] shares the buffer: first two swapped",
            Demo::Map => "&mut HashMap shares the table: values swapped",
            Demo::LevelUpNaive => "struct by value: caller's level unchanged",
            Demo::LevelUpByReference => "struct by &mut: caller's level updated",
        }
    }

    fn names() -> String {
        Demo::ALL
            .iter()
            .map(|demo| demo.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Demo {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self> {
        Demo::ALL
            .iter()
            .copied()
            .find(|demo| demo.name() == s)
            .ok_or_else(|| DemoError::unknown_demo(s, Demo::names()))
    }
}

// ============================================================================
// Narration
// ============================================================================

pub struct Narrator<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W, color: bool) -> Self {
        Narrator { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn heading(&mut self, demo: Demo) -> Result<()> {
        let title = if self.color {
            demo.name().bold().to_string()
        } else {
            demo.name().to_string()
        };
        writeln!(self.out, "\n== {} ==", title)?;
        writeln!(self.out, "   {}", demo.summary())?;
        Ok(())
    }

    fn show(&mut self, label: &str, value: impl Display) -> Result<()> {
        let label = self.paint(label, Color::Cyan);
        writeln!(self.out, "{}: {}", label, value)?;
        Ok(())
    }

    fn note(&mut self, text: impl Display) -> Result<()> {
        let text = self.paint(&text.to_string(), Color::Yellow);
        writeln!(self.out, "   {}", text)?;
        Ok(())
    }
}

fn deref_or_unbound<T: Display>(pointer: &Pointer<'_, T>) -> String {
    match pointer.get() {
        Some(value) => value.to_string(),
        None => UNBOUND.to_string(),
    }
}

fn sorted<K: Ord + fmt::Debug, V: fmt::Debug>(map: &HashMap<K, V>) -> String {
    format!("{:?}", map.iter().collect::<BTreeMap<_, _>>())
}

// ============================================================================
// Demonstrations
// ============================================================================

fn pointers<W: Write>(narrator: &mut Narrator<W>, scenario: &Scenario) -> Result<()> {
    let config = &scenario.pointer;
    let mut message = config.message.clone();
    narrator.show("message", &message)?;

    // While the pointer holds the borrow, the message is only reachable through it
    {
        let pointer = Pointer::to(&mut message);
        narrator.show("message_pointer", &pointer)?;
        narrator.show("dereferenced message_pointer", deref_or_unbound(&pointer))?;
    }

    message = config.replacement.clone();
    narrator.show("message", &message)?;
    {
        let pointer = Pointer::to(&mut message);
        narrator.show("message_pointer", &pointer)?;
        narrator.show("dereferenced message_pointer", deref_or_unbound(&pointer))?;
    }

    {
        let mut pointer = Pointer::to(&mut message);
        pointer.replace(config.via_pointer.clone());
        narrator.show("message_pointer", &pointer)?;
        narrator.show("dereferenced message_pointer", deref_or_unbound(&pointer))?;
    }
    narrator.show("message", &message)?;

    let mut number = config.number;
    let mut number_pointer: Pointer<'_, i64> = Pointer::unbound();
    narrator.show("number_pointer", &number_pointer)?;
    number_pointer.bind(&mut number);
    narrator.show("number_pointer", &number_pointer)?;
    number_pointer.clear();
    narrator.show("number_pointer", &number_pointer)?;

    // No `number_pointer += 1`: references carry no arithmetic
    narrator.note("pointer arithmetic is not available on references")
}

fn swap_naive<W: Write>(narrator: &mut Narrator<W>, scenario: &Scenario) -> Result<()> {
    let left = scenario.scalars.left;
    let right = scenario.scalars.right;
    swap_by_value(left, right);
    narrator.show("caller", format!("left: {}, right: {}", left, right))
}

fn swap_returned<W: Write>(narrator: &mut Narrator<W>, scenario: &Scenario) -> Result<()> {
    let mut left = scenario.scalars.left;
    let mut right = scenario.scalars.right;
    (left, right) = swap_by_return(left, right);
    narrator.show("caller", format!("left: {}, right: {}", left, right))
}

fn swap_referenced<W: Write>(narrator: &mut Narrator<W>, scenario: &Scenario) -> Result<()> {
    let mut left = scenario.scalars.left;
    let mut right = scenario.scalars.right;
    swap_by_reference(&mut left, &mut right);
    narrator.show("caller", format!("left: {}, right: {}", left, right))
}

fn slice<W: Write>(narrator: &mut Narrator<W>, scenario: &Scenario) -> Result<()> {
    let mut values = scenario.sequence.values.clone();
    narrator.show("before", format!("{:?}", values))?;
    swap_first_two(&mut values);
    narrator.show("after", format!("{:?}", values))?;
    if values.len() < 2 {
        narrator.note("fewer than two elements, nothing swapped")?;
    }
    Ok(())
}

fn map<W: Write>(narrator: &mut Narrator<W>, scenario: &Scenario) -> Result<()> {
    let config = &scenario.mapping;
    let mut text_to_int: HashMap<String, i64> = config
        .entries
        .iter()
        .map(|(key, value)| (key.clone(), *value))
        .collect();
    narrator.show("before", sorted(&text_to_int))?;

    // Check first on a throwaway copy so missing keys are reported, not hidden
    if let Err(err) = try_swap_entries(
        &mut text_to_int.clone(),
        config.first.clone(),
        config.second.clone(),
    ) {
        narrator.note(format!("{}, reading it as 0", err))?;
    }

    swap_entries(&mut text_to_int, config.first.clone(), config.second.clone());
    narrator.show("after", sorted(&text_to_int))
}

fn level_up_naive<W: Write>(narrator: &mut Narrator<W>, scenario: &Scenario) -> Result<()> {
    let player = scenario.player.player();
    level_up_by_value(player.clone(), scenario.player.delta);
    narrator.show("caller", &player)
}

fn level_up_referenced<W: Write>(narrator: &mut Narrator<W>, scenario: &Scenario) -> Result<()> {
    let mut player = scenario.player.player();
    level_up_by_reference(&mut player, scenario.player.delta);
    narrator.show("caller", &player)
}

/// Runs one demonstration against the scenario.
pub fn run_demo<W: Write>(
    narrator: &mut Narrator<W>,
    demo: Demo,
    scenario: &Scenario,
) -> Result<()> {
    info!("running demo {}", demo);
    narrator.heading(demo)?;
    match demo {
        Demo::Pointers => pointers(narrator, scenario),
        Demo::SwapNaive => swap_naive(narrator, scenario),
        Demo::SwapByReturn => swap_returned(narrator, scenario),
        Demo::SwapByReference => swap_referenced(narrator, scenario),
        Demo::Slice => slice(narrator, scenario),
        Demo::Map => map(narrator, scenario),
        Demo::LevelUpNaive => level_up_naive(narrator, scenario),
        Demo::LevelUpByReference => level_up_referenced(narrator, scenario),
    }
}

/// Runs every demo listed in the scenario, in order.
pub fn run<W: Write>(scenario: &Scenario, out: W) -> Result<W> {
    let mut narrator = Narrator::new(out, scenario.color);
    for demo in &scenario.demos {
        run_demo(&mut narrator, *demo, scenario)?;
    }
    Ok(narrator.into_inner())
}
