//! Add/edit dialog state
//!
//! [`DialogController`] owns the scratch copy of a configuration while it is
//! being created or edited. The surrounding shell feeds it the dialog
//! properties on every render through [`DialogController::sync`]; the scratch
//! buffer is initialized only when the session key derived from those
//! properties changes, so incidental re-renders never clobber user edits.

use crate::domain::{
    ConfigurationId, FieldUpdate, PiiConfiguration, PiiConfigurationFormData, Result,
};
use std::future::Future;

pub const DIALOG_DESCRIPTION: &str = "Configure how personally identifiable information should be handled for this data element. Fields marked with * are required.";

/// Properties handed to the dialog by its owner
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogProps<'a> {
    pub is_open: bool,
    pub initial_data: Option<&'a PiiConfiguration>,
    pub is_edit_mode: bool,
}

impl<'a> DialogProps<'a> {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn add() -> Self {
        Self {
            is_open: true,
            initial_data: None,
            is_edit_mode: false,
        }
    }

    pub fn edit(record: &'a PiiConfiguration) -> Self {
        Self {
            is_open: true,
            initial_data: Some(record),
            is_edit_mode: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Closed,
    Editing,
    Submitting,
}

/// Result of finishing a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No submission was in flight, or one already was
    Ignored,
    /// The callback succeeded; buffer reset and the dialog should close
    Closed,
    /// The callback failed; buffer kept for a retry
    StayOpen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SessionKey {
    edit_mode: bool,
    record_id: Option<ConfigurationId>,
    open: bool,
}

impl SessionKey {
    fn of(props: &DialogProps<'_>) -> Self {
        Self {
            edit_mode: props.is_edit_mode,
            record_id: props
                .initial_data
                .filter(|_| props.is_edit_mode)
                .map(|record| record.id.clone()),
            open: props.is_open,
        }
    }
}

/// Scratch buffer and submission lifecycle for one dialog
#[derive(Debug)]
pub struct DialogController {
    form: PiiConfigurationFormData,
    phase: DialogPhase,
    edit_mode: bool,
    session: Option<SessionKey>,
}

impl Default for DialogController {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogController {
    pub fn new() -> Self {
        Self {
            form: PiiConfigurationFormData::default(),
            phase: DialogPhase::Closed,
            edit_mode: false,
            session: None,
        }
    }

    /// Applies the owner's current properties
    ///
    /// Returns `true` when the scratch buffer was (re)initialized. Opening in
    /// edit mode seeds the buffer from the record over the defaults template;
    /// opening in add mode resets it to the defaults. Swapping the edit
    /// target while open is a new session and re-initializes. A transition
    /// to closed behaves like [`close`](Self::close).
    ///
    /// Properties seen while a submission is in flight are not recorded, so
    /// the first `sync` after it finishes applies them.
    pub fn sync(&mut self, props: DialogProps<'_>) -> bool {
        if self.phase == DialogPhase::Submitting {
            return false;
        }
        let key = SessionKey::of(&props);
        if self.session.as_ref() == Some(&key) {
            return false;
        }
        self.session = Some(key);

        if !props.is_open {
            self.close();
            return false;
        }

        self.edit_mode = props.is_edit_mode;
        self.form = match props.initial_data {
            Some(record) if props.is_edit_mode => record.form_data(),
            _ => PiiConfigurationFormData::default(),
        };
        self.phase = DialogPhase::Editing;

        tracing::debug!(
            edit_mode = self.edit_mode,
            configuration_id = ?props.initial_data.map(|r| r.id.as_str()),
            "Dialog initialized"
        );
        true
    }

    /// Changes one field of the scratch buffer
    ///
    /// Ignored unless the dialog is open and idle.
    pub fn update_field(&mut self, update: FieldUpdate) -> bool {
        if self.phase != DialogPhase::Editing {
            return false;
        }
        self.form.apply(update);
        true
    }

    /// Enters the submitting phase and hands out the buffer to submit
    ///
    /// Returns `None` if a submission is already in flight or the dialog is
    /// closed.
    pub fn begin_submit(&mut self) -> Option<PiiConfigurationFormData> {
        if self.phase != DialogPhase::Editing {
            tracing::debug!(phase = ?self.phase, "Submit ignored");
            return None;
        }
        self.phase = DialogPhase::Submitting;
        Some(self.form.clone())
    }

    pub fn finish_submit(&mut self, succeeded: bool) -> SubmitOutcome {
        if self.phase != DialogPhase::Submitting {
            return SubmitOutcome::Ignored;
        }
        self.phase = DialogPhase::Editing;

        if succeeded {
            self.close();
            SubmitOutcome::Closed
        } else {
            SubmitOutcome::StayOpen
        }
    }

    /// Runs a whole submission through `on_submit`
    ///
    /// Failures are not reported here; the callback is expected to have
    /// notified the user already.
    pub async fn submit<F, Fut, T>(&mut self, on_submit: F) -> SubmitOutcome
    where
        F: FnOnce(PiiConfigurationFormData) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let Some(form) = self.begin_submit() else {
            return SubmitOutcome::Ignored;
        };

        let succeeded = match on_submit(form).await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "Form submission error");
                false
            }
        };
        self.finish_submit(succeeded)
    }

    /// Closes the dialog and resets the buffer
    ///
    /// Does nothing while a submission is in flight.
    pub fn close(&mut self) -> bool {
        if self.phase == DialogPhase::Submitting {
            return false;
        }
        self.form = PiiConfigurationFormData::default();
        self.phase = DialogPhase::Closed;
        if let Some(session) = self.session.as_mut() {
            session.open = false;
        }
        true
    }

    pub fn form(&self) -> &PiiConfigurationFormData {
        &self.form
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != DialogPhase::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == DialogPhase::Submitting
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn title(&self) -> &'static str {
        if self.edit_mode {
            "Edit PII Configuration"
        } else {
            "Add New PII Configuration"
        }
    }

    pub fn description(&self) -> &'static str {
        DIALOG_DESCRIPTION
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.edit_mode, self.is_submitting()) {
            (true, true) => "Updating...",
            (true, false) => "Update Configuration",
            (false, true) => "Adding...",
            (false, false) => "Add Configuration",
        }
    }
}
