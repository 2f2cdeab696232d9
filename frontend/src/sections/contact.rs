use gloo_timers::callback::Timeout;
use log::{error, info};
use thiserror::Error;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{CONTACT_EMAIL, CONTACT_PHONE, OFFICE_ADDRESS, SOCIALS};

/// Raw values straight from the enquiry form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// A validated enquiry, trimmed and ready to hand to the visitor's mail app.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactRequest {
    /// `mailto:` link addressed to `to` with the enquiry prefilled.
    pub fn mailto(&self, to: &str) -> String {
        let subject = format!("Enquiry from {}", self.name);
        let mut body = format!("Name: {}\nEmail: {}\n", self.name, self.email);
        if let Some(phone) = &self.phone {
            body.push_str(&format!("Phone: {}\n", phone));
        }
        body.push('\n');
        body.push_str(&self.message);
        format!(
            "mailto:{}?subject={}&body={}",
            to,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please tell us your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("That email address doesn't look right.")]
    InvalidEmail,
    #[error("Please write a short message.")]
    MissingMessage,
}

impl ContactForm {
    pub fn validate(&self) -> Result<ContactRequest, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let phone = self.phone.trim();
        let message = self.message.trim();

        if name.is_empty() {
            return Err(ContactError::MissingName);
        }
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !is_plausible_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        if message.is_empty() {
            return Err(ContactError::MissingMessage);
        }

        Ok(ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            message: message.to_string(),
        })
    }
}

/// One `@`, something before it, and a dotted domain after it.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

#[derive(Clone, PartialEq)]
enum Notice {
    Success(String),
    Error(String),
}

#[function_component(ContactFormView)]
fn contact_form_view() -> Html {
    let form = use_state(ContactForm::default);
    let notice = use_state(|| None::<Notice>);
    let notice_timer = use_mut_ref(|| None::<Timeout>);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { name: input.value(), ..(*form).clone() });
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { email: input.value(), ..(*form).clone() });
        })
    };
    let on_phone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { phone: input.value(), ..(*form).clone() });
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactForm { message: input.value(), ..(*form).clone() });
        })
    };

    let show_notice = {
        let notice = notice.clone();
        let notice_timer = notice_timer.clone();
        Callback::from(move |value: Notice| {
            notice.set(Some(value));
            let notice = notice.clone();
            // replacing the handle cancels the previous timeout
            *notice_timer.borrow_mut() = Some(Timeout::new(config::NOTICE_TIMEOUT_MS, move || notice.set(None)));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let show_notice = show_notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match form.validate() {
                Ok(request) => request,
                Err(err) => {
                    show_notice.emit(Notice::Error(err.to_string()));
                    return;
                }
            };

            let Some(window) = window() else {
                return;
            };
            match window.location().set_href(&request.mailto(CONTACT_EMAIL)) {
                Ok(()) => {
                    info!("contact enquiry handed to mail app");
                    form.set(ContactForm::default());
                    show_notice.emit(Notice::Success("Thanks! Your email app will open with the message ready to send.".to_string()));
                }
                Err(err) => {
                    error!("failed to open mail app: {:?}", err);
                    show_notice.emit(Notice::Error(format!("Please email us directly at {}.", CONTACT_EMAIL)));
                }
            }
        })
    };

    html! {
        <form class="contact-form" {onsubmit}>
            <label for="name">{"Name"}<span class="required">{"*"}</span></label>
            <input id="name" placeholder="John Smith" required=true value={form.name.clone()} oninput={on_name} />

            <label for="email">{"Email"}<span class="required">{"*"}</span></label>
            <input id="email" type="email" placeholder="johnsmith@gmail.com" required=true value={form.email.clone()} oninput={on_email} />

            <label for="phone">{"Phone Number"}</label>
            <input id="phone" type="tel" placeholder="+44789 123456" value={form.phone.clone()} oninput={on_phone} />

            <label for="message">{"Message"}<span class="required">{"*"}</span></label>
            <textarea id="message" rows="5" placeholder="Hello, I'd like to enquire about..." required=true value={form.message.clone()} oninput={on_message} />

            {
                match &*notice {
                    Some(Notice::Success(text)) => html! { <div class="form-notice success" role="status">{text}</div> },
                    Some(Notice::Error(text)) => html! { <div class="form-notice error" role="alert">{text}</div> },
                    None => html! {},
                }
            }

            <button type="submit" class="submit-button">{"Send message"}</button>
        </form>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="contact" class="contact" aria-labelledby="contact-heading">
            <div class="container">
                <div class="contact-panel">
                    <Reveal class="contact-details">
                        <span class="section-badge light">{"Contact"}</span>
                        <h2 id="contact-heading">{"Get in touch"}</h2>
                        <p>{"For any inquiries or to explore your vision further, we invite you to contact our professional team using the details provided below."}</p>
                        <dl>
                            <div><dt>{"Office"}</dt><dd>{OFFICE_ADDRESS}</dd></div>
                            <div><dt>{"Email"}</dt><dd>{CONTACT_EMAIL}</dd></div>
                            <div><dt>{"Telephone"}</dt><dd>{CONTACT_PHONE}</dd></div>
                        </dl>
                        <hr />
                        <div class="follow-us">{"Follow us"}</div>
                        <div class="socials">
                            { for SOCIALS.iter().map(|s| html! {
                                <a key={s.name} href={s.href} aria-label={s.name}>
                                    <img src={s.icon} alt={s.name} width="16" height="16" />
                                </a>
                            }) }
                        </div>
                    </Reveal>
                    <Reveal>
                        <ContactFormView />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "  John Smith ".into(),
            email: "johnsmith@gmail.com".into(),
            phone: String::new(),
            message: "Hello, I'd like to enquire about a loft conversion.".into(),
        }
    }

    #[test]
    fn valid_form_is_trimmed_and_phone_is_optional() {
        let request = filled().validate().expect("valid form");
        assert_eq!(request.name, "John Smith");
        assert_eq!(request.phone, None);

        let with_phone = ContactForm { phone: " +44789 123456 ".into(), ..filled() };
        assert_eq!(with_phone.validate().unwrap().phone.as_deref(), Some("+44789 123456"));
    }

    #[test]
    fn required_fields_are_reported_in_form_order() {
        assert_eq!(ContactForm::default().validate(), Err(ContactError::MissingName));
        assert_eq!(ContactForm { email: " ".into(), ..filled() }.validate(), Err(ContactError::MissingEmail));
        assert_eq!(ContactForm { message: "\n".into(), ..filled() }.validate(), Err(ContactError::MissingMessage));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in ["john", "@gmail.com", "john@", "john@gmail", "john@@gmail.com", "jo hn@gmail.com", "john@.com", "john@gmail."] {
            let form = ContactForm { email: email.into(), ..filled() };
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{}", email);
        }
        assert!(is_plausible_email("hello@refit.co.uk"));
    }

    #[test]
    fn mailto_prefills_subject_and_body() {
        let href = filled().validate().unwrap().mailto(CONTACT_EMAIL);
        assert!(href.starts_with(&format!("mailto:{}?subject=Enquiry%20from%20John%20Smith&body=", CONTACT_EMAIL)));
        assert!(href.contains("Email%3A%20johnsmith%40gmail.com%0A"));
        assert!(href.ends_with("loft%20conversion."));
        assert!(!href.contains("Phone"));
    }

    #[test]
    fn mailto_includes_phone_when_given() {
        let form = ContactForm { phone: "+44789 123456".into(), ..filled() };
        let href = form.validate().unwrap().mailto(CONTACT_EMAIL);
        assert!(href.contains("Phone%3A%20%2B44789%20123456%0A"));
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(ContactError::InvalidEmail.to_string(), "That email address doesn't look right.");
    }
}
