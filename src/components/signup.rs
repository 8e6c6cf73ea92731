//! Sign-up screen (mounted at `/user/signUp`).
//!
//! Three fields: user id (required), numeric password (required), company id
//! (optional, sent as `null` when blank).  Success navigates to the login
//! page; failure keeps the user on the form with every field intact and
//! surfaces the gateway's `detail` message when one is present.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, MouseEvent};

use crate::constants::{LOGIN_PAGE, SIGNUP_PATH};
use crate::controller::{Feedback, FormController};
use crate::dom_utils;
use crate::envelope::{build_signup_envelope, FormError};
use crate::network::{ApiClient, Method};
use crate::notify::Notify;

const USER_ID_INPUT: &str = "signup-user-id";
const PASSWORD_INPUT: &str = "signup-user-pw";
const COMPANY_ID_INPUT: &str = "signup-company-id";
const SUBMIT_BUTTON_ID: &str = "signup-submit";

pub struct SignUpFields {
    pub user_id: String,
    pub raw_pw: String,
    pub company_id: String,
}

fn build(fields: &SignUpFields) -> Result<serde_json::Value, FormError> {
    let envelope = build_signup_envelope(&fields.user_id, &fields.raw_pw, &fields.company_id)?;
    Ok(serde_json::to_value(envelope).expect("envelope is serializable"))
}

fn controller() -> FormController<SignUpFields> {
    FormController::new(
        SIGNUP_PATH,
        build,
        Feedback {
            success: "Sign-up successful! Taking you to the login page.",
            failure: "Sign-up failed.",
        },
    )
}

/// Build the screen and wire its handlers.  Called once from `start()`.
pub fn mount(
    document: &Document,
    client: Rc<ApiClient>,
    notify: Rc<dyn Notify>,
) -> Result<(), JsValue> {
    if document.get_element_by_id("signup-panel").is_some() {
        return Ok(());
    }

    let panel = document.create_element("div")?;
    panel.set_id("signup-panel");
    panel.set_class_name("signup-panel");
    panel.set_inner_html(&format!(
        r#"
        <h1>Sign Up</h1>
        <label>User ID *
            <input type="text" id="{user}" placeholder="Enter a user ID" required>
        </label>
        <label>Password * (digits only)
            <input type="number" id="{pw}" placeholder="Enter a numeric password" required>
        </label>
        <label>Company ID
            <input type="text" id="{company}" placeholder="Optional company ID">
        </label>
        <button id="{submit}" class="signup-button">Sign Up</button>
    "#,
        user = USER_ID_INPUT,
        pw = PASSWORD_INPUT,
        company = COMPANY_ID_INPUT,
        submit = SUBMIT_BUTTON_ID,
    ));

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("<body> element missing"))?;
    body.append_child(&panel)?;

    // The password field must only ever hold digits; `type="number"` is not
    // enough on every browser, so strip anything else as it is typed.
    {
        let document_clone = document.clone();
        let filter = Closure::wrap(Box::new(move |_: Event| {
            if let Ok(input) = dom_utils::html_input(&document_clone, PASSWORD_INPUT) {
                let value = input.value();
                let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
                if digits != value {
                    input.set_value(&digits);
                }
            }
        }) as Box<dyn FnMut(_)>);
        dom_utils::element_by_id(document, PASSWORD_INPUT)?
            .add_event_listener_with_callback("input", filter.as_ref().unchecked_ref())?;
        filter.forget();
    }

    let controller = Rc::new(RefCell::new(controller()));
    {
        let document_clone = document.clone();
        let click = Closure::wrap(Box::new(move |_: MouseEvent| {
            submit_form(&document_clone, &controller, &client, &notify);
        }) as Box<dyn FnMut(_)>);
        dom_utils::element_by_id(document, SUBMIT_BUTTON_ID)?
            .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();
    }

    Ok(())
}

fn submit_form(
    document: &Document,
    controller: &Rc<RefCell<FormController<SignUpFields>>>,
    client: &Rc<ApiClient>,
    notify: &Rc<dyn Notify>,
) {
    let fields = match read_fields(document) {
        Ok(fields) => fields,
        Err(err) => {
            crate::console_error!("sign-up form incomplete: {:?}", err);
            return;
        }
    };

    let body = controller.borrow_mut().begin(&fields, notify.as_ref());
    let Some(body) = body else {
        return;
    };

    let path = controller.borrow().submit_path();
    let controller = Rc::clone(controller);
    let client = Rc::clone(client);
    let notify = Rc::clone(notify);
    spawn_local(async move {
        let result = client.request(Method::Post, path, Some(&body)).await;
        let succeeded = controller.borrow_mut().finish(&result, notify.as_ref());
        // Fields stay untouched on failure; the user corrects and retries.
        if succeeded {
            dom_utils::navigate_to(LOGIN_PAGE);
        }
    });
}

fn read_fields(document: &Document) -> Result<SignUpFields, JsValue> {
    Ok(SignUpFields {
        user_id: dom_utils::html_input(document, USER_ID_INPUT)?.value(),
        raw_pw: dom_utils::html_input(document, PASSWORD_INPUT)?.value(),
        company_id: dom_utils::html_input(document, COMPANY_ID_INPUT)?.value(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_produces_wire_shape() {
        let fields = SignUpFields {
            user_id: "alice".into(),
            raw_pw: "123456".into(),
            company_id: "".into(),
        };
        let value = build(&fields).unwrap();
        assert_eq!(value["user_id"], "alice");
        assert_eq!(value["user_pw"], 123_456);
        assert!(value["company_id"].is_null());
    }

    #[test]
    fn builder_rejects_non_numeric_password() {
        let fields = SignUpFields {
            user_id: "alice".into(),
            raw_pw: "s3cret".into(),
            company_id: "".into(),
        };
        assert_eq!(build(&fields), Err(FormError::InvalidPassword));
    }
}
