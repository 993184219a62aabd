//! Declarative rule configuration: file path → column → rule names.
//!
//! Declaration order is kept everywhere since it decides which failure gets
//! reported first. Rule names stay plain strings here, they are checked
//! against the registry by [`crate::compiler::validate_rule_set`].

/// Rules declared for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRules {
    pub name: String,
    pub rules: Vec<String>,
}

/// Columns declared for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRules {
    pub path: String,
    columns: Vec<ColumnRules>,
}

impl FileRules {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            columns: Vec::new(),
        }
    }

    /// Declare the rules of `column`, replacing earlier rules of the same column in place.
    pub fn column<I, S>(&mut self, column: impl Into<String>, rules: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let column = column.into();
        let rules: Vec<String> = rules.into_iter().map(Into::into).collect();
        match self.columns.iter_mut().find(|c| c.name == column) {
            Some(existing) => existing.rules = rules,
            None => self.columns.push(ColumnRules {
                name: column,
                rules,
            }),
        }
        self
    }

    pub fn columns(&self) -> &[ColumnRules] {
        &self.columns
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .flat_map(|c| c.rules.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    files: Vec<FileRules>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry of `path`, created at the end of the set if absent.
    pub fn file(&mut self, path: impl Into<String>) -> &mut FileRules {
        let path = path.into();
        let position = match self.files.iter().position(|f| f.path == path) {
            Some(position) => position,
            None => {
                self.files.push(FileRules::new(path));
                self.files.len() - 1
            }
        };
        &mut self.files[position]
    }

    pub fn get(&self, path: &str) -> Option<&FileRules> {
        self.files.iter().find(|f| f.path == path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Registered file paths, in declaration order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path.as_str())
    }

    pub fn files(&self) -> &[FileRules] {
        &self.files
    }

    /// Every rule name of every file.
    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().flat_map(FileRules::rule_names)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

impl From<Vec<FileRules>> for RuleSet {
    fn from(files: Vec<FileRules>) -> Self {
        let mut set = RuleSet::new();
        for file in files {
            let entry = set.file(file.path);
            for column in file.columns {
                entry.column(column.name, column.rules);
            }
        }
        set
    }
}
