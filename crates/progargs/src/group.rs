use crate::arg::ArgDef;
use crate::error::Result;
use crate::registry::{ArgId, Registry};
use crate::value::ArgValue;

/// Declaration-side record of a group, owned by the registry.
#[derive(Debug, Clone)]
pub(crate) struct GroupState {
    pub name: String,
    pub members: Vec<ArgId>,
}

impl GroupState {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            members: Vec::new(),
        }
    }
}

/// Handle for declaring arguments into one group.
///
/// Borrows the registry mutably, so names are registered globally at
/// declaration time and a group can never outlive its registry.
#[derive(Debug)]
#[must_use]
pub struct ArgGroup<'r> {
    registry: &'r mut Registry,
    index: usize,
}

impl<'r> ArgGroup<'r> {
    pub(crate) fn new(registry: &'r mut Registry, index: usize) -> Self {
        Self { registry, index }
    }

    pub fn name(&self) -> &str {
        self.registry.group_name(self.index)
    }

    /// Declare an argument whose type is the type of `default`.
    ///
    /// `short` may be empty for no short alias. Fails with
    /// [`ArgError::DuplicateName`](crate::ArgError::DuplicateName) if either
    /// name is already declared in any group of the registry.
    pub fn add<T: ArgValue>(
        &mut self,
        short: &str,
        long: &str,
        default: T,
        description: &str,
        required: bool,
    ) -> Result<&mut Self> {
        let def = ArgDef::new(short, long, default.into_value(), description, required);
        let id = self.registry.register_name(def)?;
        self.registry.push_member(self.index, id);
        Ok(self)
    }

    /// Help lines of this group's arguments in declaration order, followed
    /// by a blank line.
    pub fn render_help(&self) -> String {
        self.registry.render_group(self.index)
    }
}

#[cfg(test)]
mod tests {
    use crate::{ArgError, Registry};

    #[test]
    fn add_chains_and_keeps_declaration_order() {
        let mut registry = Registry::new();
        let mut group = registry.new_group("Input");
        group
            .add("z", "zeta", 1u32, "last letter", false)
            .unwrap()
            .add("a", "alpha", 2u32, "first letter", false)
            .unwrap();
        assert_eq!(group.name(), "Input");

        let help = group.render_help();
        let zeta = help.find("--zeta").unwrap();
        let alpha = help.find("--alpha").unwrap();
        assert!(zeta < alpha);
        assert!(help.ends_with("\n\n"));
        assert_eq!(help.lines().count(), 3);
    }

    #[test]
    fn group_help_lists_only_its_own_arguments() {
        let mut registry = Registry::new();
        registry
            .new_group("A")
            .add("", "one", 1i64, "first", false)
            .unwrap();
        let mut b = registry.new_group("B");
        b.add("", "two", 2i64, "second", false).unwrap();
        let help = b.render_help();
        assert!(help.contains("--two"));
        assert!(!help.contains("--one"));
    }

    #[test]
    fn rejected_declaration_is_not_a_member() {
        let mut registry = Registry::new();
        let mut group = registry.new_group("G");
        group.add("o", "out", String::new(), "", false).unwrap();
        let err = group.add("o", "other", String::new(), "", false).unwrap_err();
        assert_eq!(err, ArgError::DuplicateName("o".to_string()));
        assert!(!group.render_help().contains("--other"));
    }
}
