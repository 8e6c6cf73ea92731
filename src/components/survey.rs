//! Company-type survey screen (mounted at `/survey`).
//!
//! Two selectable cards, LME and SME.  Picking one builds the survey
//! envelope, sends it to the gateway's survey endpoint and then hands the
//! user on to the dashboard after a short delay, whether or not the send
//! succeeded.  The user id is a placeholder until the session plumbing lands.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, MouseEvent};

use crate::constants::{DASHBOARD_PAGE, SURVEY_REDIRECT_DELAY_MS, SURVEY_SUBMIT_PATH};
use crate::controller::{Feedback, FormController};
use crate::dom_utils;
use crate::envelope::{build_survey_envelope, FormError};
use crate::models::CompanyType;
use crate::network::{ApiClient, Method};
use crate::notify::Notify;

// TODO: replace with the signed-in user once the session flow exists.
const PLACEHOLDER_USER_ID: &str = "test_user";

const LME_CARD_ID: &str = "company-card-lme";
const SME_CARD_ID: &str = "company-card-sme";

pub struct SurveyFields {
    pub user_id: String,
    pub company_type: CompanyType,
}

fn build(fields: &SurveyFields) -> Result<serde_json::Value, FormError> {
    if fields.user_id.trim().is_empty() {
        return Err(FormError::BlankInput);
    }
    let envelope = build_survey_envelope(&fields.user_id, fields.company_type);
    Ok(serde_json::to_value(envelope).expect("envelope is serializable"))
}

fn controller() -> FormController<SurveyFields> {
    FormController::new(
        SURVEY_SUBMIT_PATH,
        build,
        Feedback {
            success: "Company type recorded. Taking you to the dashboard...",
            failure: "Could not record the company type.",
        },
    )
}

/// Build the screen and wire its handlers.  Called once from `start()`.
pub fn mount(
    document: &Document,
    client: Rc<ApiClient>,
    notify: Rc<dyn Notify>,
) -> Result<(), JsValue> {
    if document.get_element_by_id("survey-panel").is_some() {
        return Ok(());
    }

    let panel = document.create_element("div")?;
    panel.set_id("survey-panel");
    panel.set_class_name("survey-panel");
    panel.set_inner_html(&format!(
        r#"
        <h1>Select your company type</h1>
        <div class="company-cards">
            <button id="{lme}" class="company-card">
                <h2>LME</h2>
                <p>Large Manufacturing Enterprise</p>
            </button>
            <button id="{sme}" class="company-card">
                <h2>SME</h2>
                <p>Small &amp; Medium Enterprise</p>
            </button>
        </div>
    "#,
        lme = LME_CARD_ID,
        sme = SME_CARD_ID,
    ));

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("<body> element missing"))?;
    body.append_child(&panel)?;

    let controller = Rc::new(RefCell::new(controller()));
    for (card_id, company_type) in [
        (LME_CARD_ID, CompanyType::Lme),
        (SME_CARD_ID, CompanyType::Sme),
    ] {
        let controller = Rc::clone(&controller);
        let client = Rc::clone(&client);
        let notify = Rc::clone(&notify);
        let click = Closure::wrap(Box::new(move |_: MouseEvent| {
            select_company_type(company_type, &controller, &client, &notify);
        }) as Box<dyn FnMut(_)>);
        dom_utils::element_by_id(document, card_id)?
            .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();
    }

    Ok(())
}

fn select_company_type(
    company_type: CompanyType,
    controller: &Rc<RefCell<FormController<SurveyFields>>>,
    client: &Rc<ApiClient>,
    notify: &Rc<dyn Notify>,
) {
    let fields = SurveyFields {
        user_id: PLACEHOLDER_USER_ID.to_string(),
        company_type,
    };

    let body = controller.borrow_mut().begin(&fields, notify.as_ref());
    let Some(body) = body else {
        return;
    };
    crate::console_log!("company type selected: {}", company_type.as_str());

    let path = controller.borrow().submit_path();
    let controller = Rc::clone(controller);
    let client = Rc::clone(client);
    let notify = Rc::clone(notify);
    spawn_local(async move {
        let result = client.request(Method::Post, path, Some(&body)).await;
        controller.borrow_mut().finish(&result, notify.as_ref());

        // Navigation is not gated on the outcome of the send.
        TimeoutFuture::new(SURVEY_REDIRECT_DELAY_MS).await;
        dom_utils::navigate_to(DASHBOARD_PAGE);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_produces_wire_shape() {
        let fields = SurveyFields {
            user_id: "test_user".into(),
            company_type: CompanyType::Lme,
        };
        let value = build(&fields).unwrap();
        assert_eq!(value["user_id"], "test_user");
        assert_eq!(value["company_type"], "LME");
    }

    #[test]
    fn builder_gates_blank_user_id() {
        let fields = SurveyFields {
            user_id: "  ".into(),
            company_type: CompanyType::Sme,
        };
        assert_eq!(build(&fields), Err(FormError::BlankInput));
    }
}
