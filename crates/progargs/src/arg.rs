use crate::error::{ArgError, Result};
use crate::help::HelpStyle;
use crate::value::{Value, ValueType};

/// One declared argument.
///
/// Holds its default until `set` succeeds; after that the parsed value
/// replaces it and the definition can not be set again.
#[derive(Debug, Clone)]
pub struct ArgDef {
    short: Option<String>,
    long: String,
    description: String,
    required: bool,
    set: bool,
    value: Value,
}

impl ArgDef {
    /// An empty `short` means the argument has no short alias.
    pub(crate) fn new(
        short: &str,
        long: &str,
        default: Value,
        description: &str,
        required: bool,
    ) -> Self {
        Self {
            short: (!short.is_empty()).then(|| short.to_string()),
            long: long.to_string(),
            description: description.to_string(),
            required,
            set: false,
            value: default,
        }
    }

    /// The long name, which identifies the argument.
    pub fn name(&self) -> &str {
        &self.long
    }

    pub fn short_name(&self) -> Option<&str> {
        self.short.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_set(&self) -> bool {
        self.set
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_type(&self) -> ValueType {
        self.value.value_type()
    }

    /// Convert `raw` to the declared type and store it.
    ///
    /// Fails without touching the stored value if the argument was already
    /// set or `raw` does not convert.
    pub fn set(&mut self, raw: &str) -> Result<()> {
        if self.set {
            return Err(ArgError::AlreadySet(self.long.clone()).logged());
        }
        let Some(value) = self.value_type().convert(raw) else {
            return Err(ArgError::ConversionFailed {
                name: self.long.clone(),
                value: raw.to_string(),
                expected: self.value_type(),
            }
            .logged());
        };
        tracing::trace!(parameter = %self.long, value = %value, "parameter set");
        self.value = value;
        self.set = true;
        Ok(())
    }

    fn flag_names(&self) -> String {
        match &self.short {
            Some(short) => format!("-{short} OR --{} arg", self.long),
            None => format!("--{} arg", self.long),
        }
    }

    /// Render the help line(s) for this argument, without a trailing newline.
    pub fn render_help(&self, style: &HelpStyle) -> String {
        let mut out = style.two_column(&self.flag_names(), &self.description);
        if self.required {
            out.push_str(" (REQUIRED)");
        } else {
            out.push_str(&format!(" (OPTIONAL DEFAULT={})", self.value));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count() -> ArgDef {
        ArgDef::new("c", "count", Value::I32(0), "Number of items", false)
    }

    #[test]
    fn starts_unset_with_default() {
        let def = count();
        assert!(!def.is_set());
        assert!(!def.is_required());
        assert_eq!(def.name(), "count");
        assert_eq!(def.short_name(), Some("c"));
        assert_eq!(def.value(), &Value::I32(0));
    }

    #[test]
    fn empty_short_name_means_none() {
        let def = ArgDef::new("", "count", Value::I32(0), "", true);
        assert_eq!(def.short_name(), None);
    }

    #[test]
    fn set_converts_and_marks() {
        let mut def = count();
        def.set("5").unwrap();
        assert!(def.is_set());
        assert_eq!(def.value(), &Value::I32(5));
    }

    #[test]
    fn second_set_is_rejected_and_keeps_value() {
        let mut def = count();
        def.set("5").unwrap();
        let err = def.set("7").unwrap_err();
        assert_eq!(err, ArgError::AlreadySet("count".to_string()));
        assert_eq!(def.value(), &Value::I32(5));
    }

    #[test]
    fn failed_conversion_leaves_definition_unset() {
        let mut def = ArgDef::new("r", "ratio", Value::F64(1.0), "", false);
        let err = def.set("notanumber").unwrap_err();
        assert!(matches!(
            err,
            ArgError::ConversionFailed { expected: ValueType::F64, .. }
        ));
        assert!(!def.is_set());
        assert_eq!(def.value(), &Value::F64(1.0));
    }

    #[test]
    fn help_line_with_short_and_default() {
        let line = count().render_help(&HelpStyle::default());
        let expected = format!(
            "-c OR --count arg{}Number of items (OPTIONAL DEFAULT=0)",
            " ".repeat(40 - "-c OR --count arg".len())
        );
        assert_eq!(line, expected);
    }

    #[test]
    fn help_line_required_without_short() {
        let def = ArgDef::new("", "input", Value::Str(String::new()), "Input file", true);
        let line = def.render_help(&HelpStyle::default());
        assert!(line.starts_with("--input arg "));
        assert!(line.ends_with("Input file (REQUIRED)"));
        assert_eq!(line.find("Input file"), Some(40));
    }

    #[test]
    fn long_description_wraps_in_aligned_chunks() {
        let description = "x".repeat(95);
        let def = ArgDef::new("", "long", Value::Bool(false), &description, false);
        let line = def.render_help(&HelpStyle::default());
        let lines: Vec<&str> = line.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(&lines[0][40..], "x".repeat(40));
        assert_eq!(lines[1], format!("{}{}", " ".repeat(40), "x".repeat(40)));
        assert_eq!(
            lines[2],
            format!("{}{} (OPTIONAL DEFAULT=false)", " ".repeat(40), "x".repeat(15))
        );
    }
}
