// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered rename rules for the client → patient vocabulary change.
//!
//! Rules run in sequence over the same buffer, so a later rule sees the
//! output of every earlier one. Patterns are compiled with `fancy-regex`
//! because the guards need lookbehind and lookahead.

use std::borrow::Cow;

use fancy_regex::Regex;

use crate::error::{Error, Result};

/// `(pattern, replacement)` pairs, applied in order.
///
/// The lowercase and title-case rules skip a match directly preceded by
/// `use` and one whitespace character (the `"use client"` directive).
/// The all-caps rules carry no such guard; `CLIENT` only skips a
/// following `Component`.
pub const PATIENT_RULES: &[(&str, &str)] = &[
    (r"(?<!use\s)clients", "patients"),
    (r"(?<!use\s)Clients", "Patients"),
    (r"(?<!use\s)client", "patient"),
    (r"(?<!use\s)Client", "Patient"),
    (r"CLIENTS", "PATIENTS"),
    (r"CLIENT(?!\s+Component)", "PATIENT"),
];

/// A compiled pattern with its literal replacement.
#[derive(Debug)]
pub struct Rule {
    regex: Regex,
    replacement: String,
}

impl Rule {
    /// Compile a rule. The replacement is inserted verbatim.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| Error::Pattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            regex,
            replacement: replacement.to_string(),
        })
    }

    /// The source pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replace every non-overlapping match in `text`.
    ///
    /// Returns the rewritten text (borrowed when nothing matched) and the
    /// number of replacements made. Lookarounds see the whole of `text`,
    /// not just the current match.
    pub fn apply<'t>(&self, text: &'t str) -> Result<(Cow<'t, str>, usize)> {
        let mut out = String::new();
        let mut last = 0;
        let mut count = 0;

        for found in self.regex.find_iter(text) {
            let m = found.map_err(|e| Error::Pattern {
                pattern: self.pattern().to_string(),
                message: e.to_string(),
            })?;
            out.push_str(&text[last..m.start()]);
            out.push_str(&self.replacement);
            last = m.end();
            count += 1;
        }

        if count == 0 {
            return Ok((Cow::Borrowed(text), 0));
        }

        out.push_str(&text[last..]);
        Ok((Cow::Owned(out), count))
    }
}

/// Result of running a rule set over one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The rewritten text.
    pub content: String,
    /// Total replacements across all rules.
    pub replacements: usize,
}

/// An ordered list of rules.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile rules from `(pattern, replacement)` pairs, keeping their order.
    pub fn compile(pairs: &[(&str, &str)]) -> Result<Self> {
        let rules = pairs
            .iter()
            .map(|(pattern, replacement)| Rule::new(pattern, replacement))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// The client → patient rules.
    pub fn patients() -> Result<Self> {
        Self::compile(PATIENT_RULES)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Apply every rule in order to the same buffer.
    pub fn apply(&self, text: &str) -> Result<Rewrite> {
        let mut content = text.to_string();
        let mut replacements = 0;

        for rule in &self.rules {
            let (next, count) = rule.apply(&content)?;
            if count > 0 {
                let next = next.into_owned();
                tracing::debug!(pattern = rule.pattern(), count, "rule matched");
                replacements += count;
                content = next;
            }
        }

        Ok(Rewrite {
            content,
            replacements,
        })
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
