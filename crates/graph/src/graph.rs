//! The build-graph engine.
//!
//! A [`BuildGraph`] holds everything configured for one source directory:
//! source records, custom commands, targets, definitions and deferred
//! actions. It is configured mutably and then finalized exactly once.

use crate::deferred::DeferredEntry;
use crate::{
    CustomCommand, DeferredState, FinalAction, GraphError, Message, MessageLevel, Result,
    SourceRecord, Target, TargetKind,
};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::{debug, info, warn};

/// Configuration state of a single source directory.
#[derive(Debug)]
pub struct BuildGraph {
    source_dir: String,
    binary_dir: String,
    definitions: BTreeMap<String, String>,
    include_directories: Vec<String>,
    /// Source records in creation order.
    sources: Vec<SourceRecord>,
    /// Map from full path to index in `sources`.
    source_index: HashMap<String, usize>,
    /// Custom commands in registration order.
    commands: Vec<CustomCommand>,
    /// Map from output path to index in `commands`.
    output_index: HashMap<String, usize>,
    targets: BTreeMap<String, Target>,
    /// Map from alias name to the aliased target.
    aliases: BTreeMap<String, String>,
    deferred: Vec<DeferredEntry>,
    messages: Vec<Message>,
    finalized: bool,
}

impl BuildGraph {
    /// Create an empty graph for a source directory and its binary directory.
    #[must_use]
    pub fn new(source_dir: impl Into<String>, binary_dir: impl Into<String>) -> Self {
        Self {
            source_dir: trim_trailing_slash(source_dir.into()),
            binary_dir: trim_trailing_slash(binary_dir.into()),
            definitions: BTreeMap::new(),
            include_directories: Vec::new(),
            sources: Vec::new(),
            source_index: HashMap::new(),
            commands: Vec::new(),
            output_index: HashMap::new(),
            targets: BTreeMap::new(),
            aliases: BTreeMap::new(),
            deferred: Vec::new(),
            messages: Vec::new(),
            finalized: false,
        }
    }

    /// Directory holding the build description being processed.
    #[must_use]
    pub fn current_source_dir(&self) -> &str {
        &self.source_dir
    }

    /// Directory where generated files for this scope are placed.
    #[must_use]
    pub fn current_binary_dir(&self) -> &str {
        &self.binary_dir
    }

    /// Whether [`finalize`](Self::finalize) has run.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    // ------------------------------------------------------------------
    // Definitions
    // ------------------------------------------------------------------

    /// Define (or redefine) a variable in the current scope.
    pub fn add_definition(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        debug!(name = %name, value = %value, "Defined variable");
        self.definitions.insert(name, value);
    }

    /// Value of a variable, if defined.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&str> {
        self.definitions.get(name).map(String::as_str)
    }

    /// Value of a variable the caller cannot proceed without.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::MissingDefinition`] if the variable is unset or empty.
    pub fn required_definition(&self, name: &str) -> Result<&str> {
        match self.definition(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(GraphError::MissingDefinition {
                name: name.to_string(),
            }),
        }
    }

    // ------------------------------------------------------------------
    // Include directories
    // ------------------------------------------------------------------

    /// Append include directories to the current scope, skipping ones already present.
    pub fn add_include_directories<I, S>(&mut self, dirs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for dir in dirs {
            let dir = dir.into();
            if !self.include_directories.contains(&dir) {
                debug!(dir = %dir, "Added include directory");
                self.include_directories.push(dir);
            }
        }
    }

    /// Include directories of the current scope, in insertion order.
    #[must_use]
    pub fn include_directories(&self) -> &[String] {
        &self.include_directories
    }

    // ------------------------------------------------------------------
    // Source records
    // ------------------------------------------------------------------

    /// Resolve a path against the current source directory.
    ///
    /// Absolute paths and paths already under the binary directory are
    /// returned unchanged.
    #[must_use]
    pub fn resolve_full_path(&self, path: &str) -> String {
        if path.starts_with('/') || Path::new(path).is_absolute() || self.in_binary_dir(path) {
            path.to_string()
        } else {
            format!("{}/{}", self.source_dir, path)
        }
    }

    /// Look up a source record without creating it.
    #[must_use]
    pub fn source(&self, path: &str) -> Option<&SourceRecord> {
        self.source_index
            .get(&self.resolve_full_path(path))
            .map(|&idx| &self.sources[idx])
    }

    /// Look up a source record, creating an empty one if it does not exist yet.
    pub fn get_or_create_source(&mut self, path: &str) -> &mut SourceRecord {
        let full_path = self.resolve_full_path(path);
        let idx = if let Some(&idx) = self.source_index.get(&full_path) {
            idx
        } else {
            debug!(path = %full_path, "Created source record");
            self.sources.push(SourceRecord::new(full_path.clone()));
            let idx = self.sources.len() - 1;
            self.source_index.insert(full_path, idx);
            idx
        };
        &mut self.sources[idx]
    }

    /// All source records in creation order.
    #[must_use]
    pub fn sources(&self) -> &[SourceRecord] {
        &self.sources
    }

    // ------------------------------------------------------------------
    // Custom commands
    // ------------------------------------------------------------------

    /// Register a custom command for its outputs.
    ///
    /// Every output gets a source record marked as generated.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateOutput`] if any output already has a
    /// command, or [`GraphError::ConfigurationClosed`] after finalize.
    pub fn add_custom_command_to_output(&mut self, command: CustomCommand) -> Result<()> {
        self.ensure_open("add a custom command")?;

        if let Some(output) = command
            .outputs
            .iter()
            .find(|output| self.output_index.contains_key(output.as_str()))
        {
            return Err(GraphError::DuplicateOutput {
                output: output.clone(),
            });
        }

        let idx = self.commands.len();
        for output in &command.outputs {
            self.output_index.insert(output.clone(), idx);
            self.get_or_create_source(output).generated = true;
        }
        debug!(
            outputs = ?command.outputs,
            command = %command.command_line.join(" "),
            "Registered custom command"
        );
        self.commands.push(command);
        Ok(())
    }

    /// The command producing `output`, if any.
    #[must_use]
    pub fn custom_command_for_output(&self, output: &str) -> Option<&CustomCommand> {
        self.output_index
            .get(output)
            .map(|&idx| &self.commands[idx])
    }

    /// All custom commands in registration order.
    #[must_use]
    pub fn custom_commands(&self) -> &[CustomCommand] {
        &self.commands
    }

    // ------------------------------------------------------------------
    // Targets
    // ------------------------------------------------------------------

    /// Create a target.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateTarget`] if the name is already used by
    /// a target or an alias.
    pub fn add_target(&mut self, name: &str, kind: TargetKind) -> Result<&mut Target> {
        self.ensure_open("add a target")?;
        if self.targets.contains_key(name) || self.aliases.contains_key(name) {
            return Err(GraphError::DuplicateTarget {
                name: name.to_string(),
            });
        }
        debug!(name = %name, kind = ?kind, "Added target");
        Ok(self
            .targets
            .entry(name.to_string())
            .or_insert_with(|| Target::new(name, kind)))
    }

    /// Declare `alias` as another name for an existing target.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownAliasTarget`] if `target` does not exist
    /// and [`GraphError::DuplicateTarget`] if `alias` is taken.
    pub fn add_alias(&mut self, alias: &str, target: &str) -> Result<()> {
        self.ensure_open("add an alias")?;
        if !self.targets.contains_key(target) {
            return Err(GraphError::UnknownAliasTarget {
                alias: alias.to_string(),
                target: target.to_string(),
            });
        }
        if self.targets.contains_key(alias) || self.aliases.contains_key(alias) {
            return Err(GraphError::DuplicateTarget {
                name: alias.to_string(),
            });
        }
        self.aliases.insert(alias.to_string(), target.to_string());
        Ok(())
    }

    /// Find a real (non-alias) target defined in this graph.
    #[must_use]
    pub fn find_local_non_alias_target(&self, name: &str) -> Option<&Target> {
        self.targets.get(name)
    }

    /// Mutable access to a real target, e.g. to append sources.
    pub fn target_mut(&mut self, name: &str) -> Option<&mut Target> {
        self.targets.get_mut(name)
    }

    // ------------------------------------------------------------------
    // Messages
    // ------------------------------------------------------------------

    /// Emit a user-facing message. Also mirrored to tracing.
    pub fn emit_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        let text = text.into();
        match level {
            MessageLevel::Warning => warn!(target: "fluidgen::message", "{}", text),
            MessageLevel::Status => info!(target: "fluidgen::message", "{}", text),
        }
        self.messages.push(Message { level, text });
    }

    /// Messages emitted so far.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Only the warnings among [`messages`](Self::messages).
    pub fn warnings(&self) -> impl Iterator<Item = &Message> {
        self.messages
            .iter()
            .filter(|message| message.level == MessageLevel::Warning)
    }

    // ------------------------------------------------------------------
    // Deferred actions
    // ------------------------------------------------------------------

    /// Queue an action to run once configuration closes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::ConfigurationClosed`] after finalize.
    pub fn add_final_action(&mut self, action: Box<dyn FinalAction>) -> Result<()> {
        self.ensure_open("schedule a final action")?;
        debug!(kind = action.kind(), "Scheduled final action");
        self.deferred.push(DeferredEntry::new(action));
        Ok(())
    }

    /// States of queued actions, in scheduling order.
    #[must_use]
    pub fn deferred_states(&self) -> Vec<DeferredState> {
        self.deferred.iter().map(|entry| entry.state).collect()
    }

    /// Close configuration and run every queued action exactly once.
    ///
    /// Returns the number of actions executed. Calling this again is a no-op
    /// returning zero.
    pub fn finalize(&mut self) -> usize {
        if self.finalized {
            return 0;
        }
        self.finalized = true;

        let mut entries = std::mem::take(&mut self.deferred);
        for entry in &mut entries {
            entry.state = DeferredState::Pending;
        }

        for entry in &mut entries {
            debug!(kind = entry.action.kind(), "Running final action");
            entry.action.run(self);
            entry.state = DeferredState::Executed;
        }

        let executed = entries.len();
        self.deferred = entries;
        info!(
            actions = executed,
            commands = self.commands.len(),
            "Build graph finalized"
        );
        executed
    }

    fn in_binary_dir(&self, path: &str) -> bool {
        path.strip_prefix(self.binary_dir.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
    }

    fn ensure_open(&self, operation: &str) -> Result<()> {
        if self.finalized {
            return Err(GraphError::ConfigurationClosed {
                operation: operation.to_string(),
            });
        }
        Ok(())
    }
}

fn trim_trailing_slash(mut dir: String) -> String {
    while dir.len() > 1 && dir.ends_with('/') {
        dir.pop();
    }
    dir
}
