//! Three-step contact wizard. The page component owns a `ContactWizard`
//! and drives it from input events and the single submission request.

use serde::Serialize;
use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Thank you! We'll be in touch within 24 hours.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again or email us directly.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ServiceOption {
    #[serde(rename = "Aerial Marketing & Real Estate")]
    AerialMarketing,
    #[serde(rename = "Inspections & Construction Monitoring")]
    Inspections,
    #[serde(rename = "Mapping & Site Visualization")]
    Mapping,
    #[serde(rename = "Legal & Investigative")]
    Legal,
    #[serde(rename = "Studio Photography")]
    Studio,
    #[serde(rename = "Other")]
    Other,
}

impl ServiceOption {
    pub const ALL: [ServiceOption; 6] = [
        ServiceOption::AerialMarketing,
        ServiceOption::Inspections,
        ServiceOption::Mapping,
        ServiceOption::Legal,
        ServiceOption::Studio,
        ServiceOption::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceOption::AerialMarketing => "Aerial Marketing & Real Estate",
            ServiceOption::Inspections => "Inspections & Construction Monitoring",
            ServiceOption::Mapping => "Mapping & Site Visualization",
            ServiceOption::Legal => "Legal & Investigative",
            ServiceOption::Studio => "Studio Photography",
            ServiceOption::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Timeline {
    #[serde(rename = "ASAP")]
    Asap,
    #[serde(rename = "1-2 weeks")]
    OneToTwoWeeks,
    #[serde(rename = "1 month")]
    OneMonth,
    #[serde(rename = "2-3 months")]
    TwoToThreeMonths,
    #[serde(rename = "Flexible")]
    Flexible,
}

impl Timeline {
    pub const ALL: [Timeline; 5] = [
        Timeline::Asap,
        Timeline::OneToTwoWeeks,
        Timeline::OneMonth,
        Timeline::TwoToThreeMonths,
        Timeline::Flexible,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Timeline::Asap => "ASAP",
            Timeline::OneToTwoWeeks => "1-2 weeks",
            Timeline::OneMonth => "1 month",
            Timeline::TwoToThreeMonths => "2-3 months",
            Timeline::Flexible => "Flexible",
        }
    }

    /// Parses a `<select>` value. The empty placeholder option maps to `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

/// File picked on step 3. Kept in form state only, the JSON payload does
/// not carry it.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachedFile {
    pub name: String,
    pub size: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub services: Vec<ServiceOption>,
    pub location: String,
    pub timeline: Option<Timeline>,
    pub message: String,
    #[serde(skip)]
    pub file: Option<AttachedFile>,
}

impl ContactForm {
    pub fn contact_info_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }

    pub fn project_details_complete(&self) -> bool {
        !self.services.is_empty()
    }

    /// Adds the option at the end of the selection, or removes it if present.
    pub fn toggle_service(&mut self, option: ServiceOption) {
        if let Some(pos) = self.services.iter().position(|s| *s == option) {
            self.services.remove(pos);
        } else {
            self.services.push(option);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ContactInfo,
    ProjectDetails,
    AdditionalInfo,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::ContactInfo => 1,
            Step::ProjectDetails => 2,
            Step::AdditionalInfo => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::ContactInfo => "Contact Information",
            Step::ProjectDetails => "Project Details",
            Step::AdditionalInfo => "Additional Information",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Failed,
}

impl SubmitOutcome {
    /// Only a 2xx response counts as accepted.
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            SubmitOutcome::Accepted
        } else {
            SubmitOutcome::Failed
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("required fields for {0:?} are missing")]
    ValidationGate(Step),
    #[error("a submission is already in flight")]
    Pending,
    #[error("the first step has no previous step")]
    NoPreviousStep,
    #[error("the last step submits instead of advancing")]
    NoNextStep,
    #[error("submission is only available on the last step")]
    NotFinalStep,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactWizard {
    step: Step,
    form: ContactForm,
    pending: bool,
    status: SubmitStatus,
}

impl Default for ContactWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactWizard {
    pub fn new() -> Self {
        Self {
            step: Step::ContactInfo,
            form: ContactForm::default(),
            pending: false,
            status: SubmitStatus::Idle,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn can_advance(&self) -> bool {
        match self.step {
            Step::ContactInfo => self.form.contact_info_complete(),
            Step::ProjectDetails => self.form.project_details_complete(),
            Step::AdditionalInfo => false,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.step == Step::AdditionalInfo
            && !self.pending
            && self.form.contact_info_complete()
            && self.form.project_details_complete()
    }

    pub fn advance(&mut self) -> Result<Step, WizardError> {
        let next = match self.step {
            Step::ContactInfo => Step::ProjectDetails,
            Step::ProjectDetails => Step::AdditionalInfo,
            Step::AdditionalInfo => return Err(WizardError::NoNextStep),
        };
        if !self.can_advance() {
            return Err(WizardError::ValidationGate(self.step));
        }
        self.step = next;
        Ok(next)
    }

    pub fn back(&mut self) -> Result<Step, WizardError> {
        if self.pending {
            return Err(WizardError::Pending);
        }
        let previous = match self.step {
            Step::ContactInfo => return Err(WizardError::NoPreviousStep),
            Step::ProjectDetails => Step::ContactInfo,
            Step::AdditionalInfo => Step::ProjectDetails,
        };
        self.step = previous;
        Ok(previous)
    }

    /// Enters the pending state and hands out the payload for the one
    /// request the caller must now send.
    pub fn begin_submit(&mut self) -> Result<ContactForm, WizardError> {
        if self.pending {
            return Err(WizardError::Pending);
        }
        if self.step != Step::AdditionalInfo {
            return Err(WizardError::NotFinalStep);
        }
        if !self.form.contact_info_complete() {
            return Err(WizardError::ValidationGate(Step::ContactInfo));
        }
        if !self.form.project_details_complete() {
            return Err(WizardError::ValidationGate(Step::ProjectDetails));
        }
        self.pending = true;
        Ok(self.form.clone())
    }

    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        self.pending = false;
        match outcome {
            SubmitOutcome::Accepted => {
                self.status = SubmitStatus::Success;
                self.step = Step::ContactInfo;
                self.form = ContactForm::default();
            }
            SubmitOutcome::Failed => {
                self.status = SubmitStatus::Error;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled_contact_info() -> ContactWizard {
        let mut wizard = ContactWizard::new();
        wizard.form_mut().name = "Jordan".into();
        wizard.form_mut().email = "jordan@acme.test".into();
        wizard
    }

    fn at_final_step() -> ContactWizard {
        let mut wizard = filled_contact_info();
        wizard.advance().unwrap();
        wizard.form_mut().toggle_service(ServiceOption::Mapping);
        wizard.form_mut().location = "Austin, TX".into();
        wizard.form_mut().timeline = Some(Timeline::OneMonth);
        wizard.advance().unwrap();
        wizard.form_mut().message = "Site survey".into();
        wizard
    }

    #[test]
    fn starts_on_contact_info() {
        let wizard = ContactWizard::new();
        assert_eq!(wizard.step(), Step::ContactInfo);
        assert_eq!(wizard.status(), SubmitStatus::Idle);
        assert!(!wizard.is_pending());
        assert_eq!(wizard.form(), &ContactForm::default());
    }

    #[test]
    fn contact_info_gate_needs_name_and_email() {
        for (name, email, allowed) in [
            ("", "", false),
            ("Jordan", "", false),
            ("", "jordan@acme.test", false),
            ("Jordan", "jordan@acme.test", true),
        ] {
            let mut wizard = ContactWizard::new();
            wizard.form_mut().name = name.into();
            wizard.form_mut().email = email.into();
            assert_eq!(wizard.can_advance(), allowed);
            if allowed {
                assert_eq!(wizard.advance(), Ok(Step::ProjectDetails));
            } else {
                assert_eq!(wizard.advance(), Err(WizardError::ValidationGate(Step::ContactInfo)));
                assert_eq!(wizard.step(), Step::ContactInfo);
            }
        }
    }

    #[test]
    fn optional_contact_fields_do_not_gate() {
        let mut wizard = filled_contact_info();
        wizard.form_mut().company.clear();
        wizard.form_mut().phone.clear();
        assert!(wizard.can_advance());
    }

    #[test]
    fn first_step_has_no_back() {
        let mut wizard = ContactWizard::new();
        assert_eq!(wizard.back(), Err(WizardError::NoPreviousStep));
    }

    #[test]
    fn project_details_gate_needs_a_service() {
        let mut wizard = filled_contact_info();
        wizard.advance().unwrap();
        assert!(!wizard.can_advance());
        assert_eq!(wizard.advance(), Err(WizardError::ValidationGate(Step::ProjectDetails)));

        wizard.form_mut().toggle_service(ServiceOption::Legal);
        assert!(wizard.can_advance());

        wizard.form_mut().toggle_service(ServiceOption::Legal);
        assert!(!wizard.can_advance());

        wizard.form_mut().toggle_service(ServiceOption::Other);
        assert_eq!(wizard.advance(), Ok(Step::AdditionalInfo));
    }

    #[test]
    fn back_is_unconditional_from_later_steps() {
        let mut wizard = at_final_step();
        assert_eq!(wizard.advance(), Err(WizardError::NoNextStep));
        wizard.form_mut().services.clear();
        assert_eq!(wizard.back(), Ok(Step::ProjectDetails));
        assert_eq!(wizard.back(), Ok(Step::ContactInfo));
    }

    #[test]
    fn toggle_service_appends_in_selection_order() {
        let mut form = ContactForm::default();
        form.toggle_service(ServiceOption::Studio);
        form.toggle_service(ServiceOption::AerialMarketing);
        form.toggle_service(ServiceOption::Inspections);
        form.toggle_service(ServiceOption::AerialMarketing);
        assert_eq!(form.services, vec![ServiceOption::Studio, ServiceOption::Inspections]);
    }

    #[test]
    fn submit_only_from_final_step() {
        let mut wizard = filled_contact_info();
        assert_eq!(wizard.begin_submit(), Err(WizardError::NotFinalStep));
        assert!(!wizard.is_pending());
    }

    #[test]
    fn submit_rechecks_earlier_gates() {
        let mut wizard = at_final_step();
        wizard.form_mut().email.clear();
        assert!(!wizard.can_submit());
        assert_eq!(wizard.begin_submit(), Err(WizardError::ValidationGate(Step::ContactInfo)));

        let mut wizard = at_final_step();
        wizard.form_mut().services.clear();
        assert_eq!(wizard.begin_submit(), Err(WizardError::ValidationGate(Step::ProjectDetails)));
    }

    #[test]
    fn pending_blocks_resubmit_and_back() {
        let mut wizard = at_final_step();
        assert!(wizard.can_submit());
        wizard.begin_submit().unwrap();
        assert!(wizard.is_pending());
        assert!(!wizard.can_submit());
        assert_eq!(wizard.begin_submit(), Err(WizardError::Pending));
        assert_eq!(wizard.back(), Err(WizardError::Pending));
        assert_eq!(wizard.step(), Step::AdditionalInfo);
    }

    #[test]
    fn accepted_submission_clears_form_and_resets_step() {
        let mut wizard = at_final_step();
        wizard.form_mut().file = Some(AttachedFile { name: "plan.pdf".into(), size: 1024.0 });
        wizard.begin_submit().unwrap();
        wizard.finish_submit(SubmitOutcome::from_status(200));

        assert_eq!(wizard.status(), SubmitStatus::Success);
        assert_eq!(wizard.step(), Step::ContactInfo);
        assert!(!wizard.is_pending());
        assert_eq!(wizard.form(), &ContactForm::default());
    }

    #[test]
    fn failed_submission_keeps_everything_and_allows_retry() {
        let mut wizard = at_final_step();
        let before = wizard.form().clone();
        wizard.begin_submit().unwrap();
        wizard.finish_submit(SubmitOutcome::from_status(500));

        assert_eq!(wizard.status(), SubmitStatus::Error);
        assert_eq!(wizard.step(), Step::AdditionalInfo);
        assert!(!wizard.is_pending());
        assert_eq!(wizard.form(), &before);

        assert!(wizard.begin_submit().is_ok());
    }

    #[test]
    fn transport_failure_maps_to_error() {
        let mut wizard = at_final_step();
        wizard.begin_submit().unwrap();
        wizard.finish_submit(SubmitOutcome::Failed);
        assert_eq!(wizard.status(), SubmitStatus::Error);
    }

    #[test]
    fn only_2xx_is_accepted() {
        assert_eq!(SubmitOutcome::from_status(200), SubmitOutcome::Accepted);
        assert_eq!(SubmitOutcome::from_status(204), SubmitOutcome::Accepted);
        for status in [301, 400, 405, 500, 503] {
            assert_eq!(SubmitOutcome::from_status(status), SubmitOutcome::Failed);
        }
    }

    #[test]
    fn payload_carries_every_field_but_the_file() {
        let mut wizard = at_final_step();
        wizard.form_mut().company = "Acme Realty".into();
        wizard.form_mut().file = Some(AttachedFile { name: "plan.pdf".into(), size: 2048.0 });
        let payload = wizard.begin_submit().unwrap();

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "name": "Jordan",
                "company": "Acme Realty",
                "email": "jordan@acme.test",
                "phone": "",
                "services": ["Mapping & Site Visualization"],
                "location": "Austin, TX",
                "timeline": "1 month",
                "message": "Site survey",
            })
        );
    }

    #[test]
    fn unset_timeline_serializes_as_null() {
        let form = ContactForm::default();
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value["timeline"], serde_json::Value::Null);
    }

    #[test]
    fn timeline_placeholder_is_none() {
        assert_eq!(Timeline::from_label(""), None);
        assert_eq!(Timeline::from_label("2-3 months"), Some(Timeline::TwoToThreeMonths));
    }
}
