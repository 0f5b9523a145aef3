use yew::prelude::*;
use gloo_net::http::Request;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use log::{error, info, warn};

use crate::config;
use crate::contact::{
    AttachedFile, ContactForm, ContactWizard, ServiceOption, Step, SubmitOutcome, SubmitStatus,
    Timeline, FAILURE_MESSAGE, SUCCESS_MESSAGE,
};

pub enum ContactMsg {
    SetName(String),
    SetCompany(String),
    SetEmail(String),
    SetPhone(String),
    ToggleService(ServiceOption),
    SetLocation(String),
    SetTimeline(Option<Timeline>),
    SetMessage(String),
    SetFile(Option<AttachedFile>),
    Next,
    Back,
    Submit,
    SubmitFinished(SubmitOutcome),
}

pub struct Contact {
    wizard: ContactWizard,
}

// One request per call: no retry, no timeout beyond the browser's own.
async fn send_submission(payload: ContactForm) -> SubmitOutcome {
    let request = match Request::post(&config::contact_endpoint()).json(&payload) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to encode contact submission: {}", e);
            return SubmitOutcome::Failed;
        }
    };

    match request.send().await {
        Ok(response) => {
            info!("Contact submission answered with status {}", response.status());
            SubmitOutcome::from_status(response.status())
        }
        Err(e) => {
            error!("Contact submission failed: {}", e);
            SubmitOutcome::Failed
        }
    }
}

fn input_value(e: &Event) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

impl Component for Contact {
    type Message = ContactMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            wizard: ContactWizard::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let form = self.wizard.form_mut();
        match msg {
            ContactMsg::SetName(value) => form.name = value,
            ContactMsg::SetCompany(value) => form.company = value,
            ContactMsg::SetEmail(value) => form.email = value,
            ContactMsg::SetPhone(value) => form.phone = value,
            ContactMsg::ToggleService(option) => form.toggle_service(option),
            ContactMsg::SetLocation(value) => form.location = value,
            ContactMsg::SetTimeline(value) => form.timeline = value,
            ContactMsg::SetMessage(value) => form.message = value,
            ContactMsg::SetFile(file) => form.file = file,
            ContactMsg::Next => {
                if let Err(e) = self.wizard.advance() {
                    warn!("Cannot continue: {}", e);
                    return false;
                }
            }
            ContactMsg::Back => {
                if let Err(e) = self.wizard.back() {
                    warn!("Cannot go back: {}", e);
                    return false;
                }
            }
            ContactMsg::Submit => match self.wizard.begin_submit() {
                Ok(payload) => {
                    ctx.link().send_future(async move {
                        ContactMsg::SubmitFinished(send_submission(payload).await)
                    });
                }
                Err(e) => {
                    warn!("Submission blocked: {}", e);
                    return false;
                }
            },
            ContactMsg::SubmitFinished(outcome) => {
                info!("Contact submission outcome: {:?}", outcome);
                self.wizard.finish_submit(outcome);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let step = self.wizard.step();
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });

        html! {
            <div class="contact-page">
                <section class="contact-hero">
                    <h1>{"Get Started Today"}</h1>
                    <p>
                        {"Ready to transform your project with professional aerial and studio imaging? Let's discuss your specific needs and create a custom solution."}
                    </p>
                </section>

                <section class="contact-body">
                    <div class="contact-form">
                        { self.render_progress(step) }
                        <h2 class="step-title">{step.title()}</h2>

                        <form {onsubmit}>
                            {
                                match step {
                                    Step::ContactInfo => self.render_contact_info(ctx),
                                    Step::ProjectDetails => self.render_project_details(ctx),
                                    Step::AdditionalInfo => self.render_additional_info(ctx),
                                }
                            }
                        </form>

                        {
                            match self.wizard.status() {
                                SubmitStatus::Success => html! {
                                    <div class="status status--success"><p>{SUCCESS_MESSAGE}</p></div>
                                },
                                SubmitStatus::Error => html! {
                                    <div class="status status--error"><p>{FAILURE_MESSAGE}</p></div>
                                },
                                SubmitStatus::Idle => html! {},
                            }
                        }
                    </div>

                    <div class="contact-direct">
                        <h3>{"Get In Touch Directly"}</h3>
                        <p>{"hello@jsskyline.com"}</p>
                        <p>{"(555) 123-4567"}</p>
                        <p>{"Response within 24 hours"}</p>

                        <h3>{"What Happens Next?"}</h3>
                        <ol>
                            <li><strong>{"Initial Consultation"}</strong>{" We'll discuss your project needs and objectives"}</li>
                            <li><strong>{"Custom Proposal"}</strong>{" Detailed quote with timeline and deliverables"}</li>
                            <li><strong>{"Project Execution"}</strong>{" Professional capture and post-production"}</li>
                        </ol>
                    </div>
                </section>

                <style>
                    {r#"
                    .contact-page {
                        min-height: 100vh;
                        background: #171717;
                        color: #FAFAFA;
                        padding: 8rem 2rem 4rem;
                    }
                    .contact-hero {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .contact-body {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 3rem;
                        max-width: 960px;
                        margin: 0 auto;
                    }
                    .progress {
                        display: flex;
                        gap: 0.5rem;
                        margin-bottom: 1rem;
                    }
                    .progress__dot {
                        width: 2rem;
                        height: 2rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #404040;
                        color: #A3A3A3;
                    }
                    .progress__dot--reached {
                        background: #FF9023;
                        color: #0A0A0A;
                    }
                    .step-title, .contact-direct h3 {
                        color: #FF9023;
                    }
                    .field {
                        display: flex;
                        flex-direction: column;
                        margin-bottom: 1rem;
                    }
                    .field input, .field select, .field textarea {
                        padding: 0.75rem 1rem;
                        background: #262626;
                        border: 1px solid #404040;
                        border-radius: 8px;
                        color: #F5F5F5;
                    }
                    .services {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 0.75rem;
                        margin-bottom: 1rem;
                    }
                    .actions {
                        display: flex;
                        gap: 1rem;
                    }
                    button:disabled {
                        opacity: 0.5;
                        cursor: not-allowed;
                    }
                    .status {
                        margin-top: 1.5rem;
                        padding: 1rem;
                        border-radius: 8px;
                    }
                    .status--success {
                        border: 1px solid #166534;
                        color: #4ADE80;
                    }
                    .status--error {
                        border: 1px solid #991B1B;
                        color: #F87171;
                    }
                    "#}
                </style>
            </div>
        }
    }
}

impl Contact {
    fn render_progress(&self, step: Step) -> Html {
        html! {
            <div class="progress">
                { for (1..=3u8).map(|n| html! {
                    <div class={classes!("progress__dot", (step.number() >= n).then(|| "progress__dot--reached"))}>
                        {n}
                    </div>
                })}
            </div>
        }
    }

    fn render_contact_info(&self, ctx: &Context<Self>) -> Html {
        let form = self.wizard.form();
        let link = ctx.link();
        html! {
            <div class="step">
                <label class="field">
                    {"Name *"}
                    <input type="text" required={true} value={form.name.clone()}
                        oninput={link.callback(|e: InputEvent| ContactMsg::SetName(input_value(&e)))} />
                </label>
                <label class="field">
                    {"Company"}
                    <input type="text" value={form.company.clone()}
                        oninput={link.callback(|e: InputEvent| ContactMsg::SetCompany(input_value(&e)))} />
                </label>
                <label class="field">
                    {"Email *"}
                    <input type="email" required={true} value={form.email.clone()}
                        oninput={link.callback(|e: InputEvent| ContactMsg::SetEmail(input_value(&e)))} />
                </label>
                <label class="field">
                    {"Phone"}
                    <input type="tel" value={form.phone.clone()}
                        oninput={link.callback(|e: InputEvent| ContactMsg::SetPhone(input_value(&e)))} />
                </label>
                <button type="button" class="btn-primary"
                    disabled={!self.wizard.can_advance()}
                    onclick={link.callback(|_| ContactMsg::Next)}>
                    {"Continue"}
                </button>
            </div>
        }
    }

    fn render_project_details(&self, ctx: &Context<Self>) -> Html {
        let form = self.wizard.form();
        let link = ctx.link();
        let selected_timeline = form.timeline.map(Timeline::label).unwrap_or("");
        html! {
            <div class="step">
                <p class="field-label">{"Services Interested In *"}</p>
                <div class="services">
                    { for ServiceOption::ALL.into_iter().map(|option| html! {
                        <label class="service-option">
                            <input type="checkbox"
                                checked={form.services.contains(&option)}
                                onchange={link.callback(move |_: Event| ContactMsg::ToggleService(option))} />
                            <span>{option.label()}</span>
                        </label>
                    })}
                </div>
                <label class="field">
                    {"Location"}
                    <input type="text" placeholder="City, State or Address" value={form.location.clone()}
                        oninput={link.callback(|e: InputEvent| ContactMsg::SetLocation(input_value(&e)))} />
                </label>
                <label class="field">
                    {"Timeline"}
                    <select onchange={link.callback(|e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        ContactMsg::SetTimeline(Timeline::from_label(&select.value()))
                    })}>
                        <option value="" selected={selected_timeline.is_empty()}>{"Select timeline"}</option>
                        { for Timeline::ALL.into_iter().map(|timeline| html! {
                            <option value={timeline.label()} selected={timeline.label() == selected_timeline}>
                                {timeline.label()}
                            </option>
                        })}
                    </select>
                </label>
                <div class="actions">
                    <button type="button" class="btn-secondary" onclick={link.callback(|_| ContactMsg::Back)}>
                        {"Back"}
                    </button>
                    <button type="button" class="btn-primary"
                        disabled={!self.wizard.can_advance()}
                        onclick={link.callback(|_| ContactMsg::Next)}>
                        {"Continue"}
                    </button>
                </div>
            </div>
        }
    }

    fn render_additional_info(&self, ctx: &Context<Self>) -> Html {
        let form = self.wizard.form();
        let link = ctx.link();
        let pending = self.wizard.is_pending();
        html! {
            <div class="step">
                <label class="field">
                    {"Project Details"}
                    <textarea rows="6" value={form.message.clone()}
                        placeholder="Tell us about your project, specific requirements, or any questions you have..."
                        oninput={link.callback(|e: InputEvent| {
                            let area: HtmlTextAreaElement = e.target_unchecked_into();
                            ContactMsg::SetMessage(area.value())
                        })} />
                </label>
                <label class="field">
                    {"Attach File (Optional)"}
                    <input type="file"
                        onchange={link.callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            let file = input
                                .files()
                                .and_then(|files| files.get(0))
                                .map(|file| AttachedFile { name: file.name(), size: file.size() });
                            ContactMsg::SetFile(file)
                        })} />
                    <small>{"Upload site plans, reference images, or other relevant files"}</small>
                </label>
                if let Some(file) = &form.file {
                    <p class="attached">{format!("Selected: {}", file.name)}</p>
                }
                <div class="actions">
                    <button type="button" class="btn-secondary" disabled={pending}
                        onclick={link.callback(|_| ContactMsg::Back)}>
                        {"Back"}
                    </button>
                    <button type="submit" class="btn-primary" disabled={!self.wizard.can_submit()}>
                        { if pending { "Sending..." } else { "Send Message" } }
                    </button>
                </div>
            </div>
        }
    }
}
