use std::collections::HashMap;
use std::fmt;

use indexmap::{IndexMap, IndexSet};

use crate::arg::ArgDef;
use crate::error::{ArgError, Result};
use crate::group::{ArgGroup, GroupState};
use crate::help::HelpStyle;
use crate::value::{ArgValue, Value, ValueType};

/// Index of a definition in the registry's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ArgId(usize);

/// Owner of every group, argument definition and name table.
///
/// A registry is used in two phases: arguments are declared through
/// [`Registry::new_group`], then [`Registry::parse`] runs once over the
/// token vector and values are read back with [`Registry::lookup`].
#[derive(Debug, Default)]
pub struct Registry {
    defs: Vec<ArgDef>,
    groups: Vec<GroupState>,
    short_names: HashMap<String, ArgId>,
    // Insertion order drives `validate_required`.
    long_names: IndexMap<String, ArgId>,
    positionals: IndexSet<String>,
    style: HelpStyle,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_help_style(mut self, style: HelpStyle) -> Self {
        self.style = style;
        self
    }

    pub fn help_style(&self) -> &HelpStyle {
        &self.style
    }

    /// Start a new group. Group names are headers only and may repeat.
    pub fn new_group(&mut self, name: &str) -> ArgGroup<'_> {
        tracing::debug!(group = name, "new argument group");
        self.groups.push(GroupState::new(name));
        let index = self.groups.len() - 1;
        ArgGroup::new(self, index)
    }

    /// Record both names of `def` in the global tables and take ownership of it.
    ///
    /// Both names are checked before anything is inserted, so a rejected
    /// definition leaves the tables untouched.
    pub(crate) fn register_name(&mut self, def: ArgDef) -> Result<ArgId> {
        if def.name().is_empty() {
            let short = def.short_name().unwrap_or_default().to_string();
            return Err(ArgError::InvalidName { short }.logged());
        }
        if let Some(short) = def.short_name() {
            if self.short_names.contains_key(short) {
                return Err(ArgError::DuplicateName(short.to_string()).logged());
            }
        }
        if self.long_names.contains_key(def.name()) {
            return Err(ArgError::DuplicateName(def.name().to_string()).logged());
        }

        let id = ArgId(self.defs.len());
        if let Some(short) = def.short_name() {
            self.short_names.insert(short.to_string(), id);
        }
        self.long_names.insert(def.name().to_string(), id);
        self.defs.push(def);
        Ok(id)
    }

    pub(crate) fn push_member(&mut self, group: usize, id: ArgId) {
        self.groups[group].members.push(id);
    }

    pub(crate) fn group_name(&self, group: usize) -> &str {
        &self.groups[group].name
    }

    /// Scan `tokens` left to right, setting flagged arguments and recording
    /// everything else as positional.
    ///
    /// `--name value` and `-short value` set the named argument; the value
    /// token is consumed and never looked at as a flag. The first token is
    /// not special, so callers pass whatever slice of argv they want parsed.
    /// Stops at the first error; arguments set before it stay set.
    pub fn parse<I, S>(&mut self, tokens: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = tokens.into_iter();
        while let Some(token) = tokens.next() {
            let token = token.as_ref();
            let id = if let Some(name) = token.strip_prefix("--") {
                self.long_names.get(name).copied()
            } else if let Some(name) = token.strip_prefix('-') {
                self.short_names.get(name).copied()
            } else {
                tracing::trace!(token, "positional token");
                self.positionals.insert(token.to_string());
                continue;
            };

            let Some(id) = id else {
                return Err(ArgError::UnknownName(token.to_string()).logged());
            };
            let Some(value) = tokens.next() else {
                return Err(ArgError::MissingValue(token.to_string()).logged());
            };
            tracing::debug!(flag = token, "matched flag");
            self.defs[id.0].set(value.as_ref())?;
        }
        Ok(())
    }

    /// Fail on the first required argument, in declaration order, that was
    /// never set.
    pub fn validate_required(&self) -> Result<()> {
        for (name, id) in &self.long_names {
            let def = &self.defs[id.0];
            if def.is_required() && !def.is_set() {
                return Err(ArgError::MissingRequired(name.clone()).logged());
            }
        }
        Ok(())
    }

    pub fn lookup(&self, long_name: &str) -> Result<ArgRef<'_>> {
        match self.long_names.get(long_name) {
            Some(id) => Ok(ArgRef {
                def: &self.defs[id.0],
            }),
            None => Err(ArgError::UnknownName(long_name.to_string()).logged()),
        }
    }

    /// Whether `name` was passed as a positional token, or is the long name
    /// of an argument that was set.
    pub fn has(&self, name: &str) -> bool {
        self.positionals.contains(name)
            || self
                .long_names
                .get(name)
                .is_some_and(|id| self.defs[id.0].is_set())
    }

    /// Positional tokens in the order they were first seen, without repeats.
    pub fn positionals(&self) -> impl Iterator<Item = &str> {
        self.positionals.iter().map(String::as_str)
    }

    pub(crate) fn render_group(&self, group: usize) -> String {
        let mut out = String::new();
        for id in &self.groups[group].members {
            out.push_str(&self.defs[id.0].render_help(&self.style));
            out.push('\n');
        }
        out.push('\n');
        out
    }

    /// Every group under a `name:` header, in the order groups were created.
    pub fn render_help(&self) -> String {
        let mut out = String::new();
        for (idx, group) in self.groups.iter().enumerate() {
            out.push_str(&group.name);
            out.push_str(":\n");
            out.push_str(&self.render_group(idx));
        }
        out
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_help())
    }
}

/// Read handle for one argument, returned by [`Registry::lookup`].
#[derive(Debug, Clone, Copy)]
pub struct ArgRef<'a> {
    def: &'a ArgDef,
}

impl<'a> ArgRef<'a> {
    pub fn name(&self) -> &'a str {
        self.def.name()
    }

    pub fn is_set(&self) -> bool {
        self.def.is_set()
    }

    /// True while the argument still holds its default.
    pub fn is_empty(&self) -> bool {
        !self.def.is_set()
    }

    pub fn value(&self) -> &'a Value {
        self.def.value()
    }

    pub fn value_type(&self) -> ValueType {
        self.def.value_type()
    }

    pub fn definition(&self) -> &'a ArgDef {
        self.def
    }

    /// The current value as `T`, which must be the declared type.
    pub fn get<T: ArgValue>(&self) -> Result<T> {
        T::from_value(self.def.value()).ok_or_else(|| {
            ArgError::TypeMismatch {
                name: self.def.name().to_string(),
                declared: self.def.value_type(),
                requested: T::TYPE,
            }
            .logged()
        })
    }
}
