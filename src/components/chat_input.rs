//! Chat-style input screen (mounted at `/login`).
//!
//! Owns the screen's transient state: the current input field and the
//! append-only history of everything submitted since page load.  Submissions
//! go to `POST /api/input`; the value is recorded in the history and the
//! field cleared as soon as the envelope is accepted, before the network call
//! resolves, so the history reflects intent even when the gateway later
//! fails.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, KeyboardEvent, MouseEvent};

use crate::constants::INPUT_SUBMIT_PATH;
use crate::controller::{Feedback, FormController};
use crate::dom_utils;
use crate::envelope::{build_chat_envelope, FormError};
use crate::network::{ApiClient, Method};
use crate::notify::Notify;

const INPUT_ID: &str = "chat-input";
const SEND_BUTTON_ID: &str = "send-button";
const LOG_ID: &str = "input-log";

pub struct ChatFields {
    pub text: String,
    /// Snapshot of the history *before* this submission is recorded.
    pub history: Vec<String>,
}

fn build(fields: &ChatFields) -> Result<serde_json::Value, FormError> {
    if fields.text.trim().is_empty() {
        return Err(FormError::BlankInput);
    }
    let envelope = build_chat_envelope(&fields.text, &fields.history);
    Ok(serde_json::to_value(envelope).expect("envelope is serializable"))
}

fn controller() -> FormController<ChatFields> {
    FormController::new(
        INPUT_SUBMIT_PATH,
        build,
        Feedback {
            success: "Input recorded.",
            failure: "Submission failed. Please try again.",
        },
    )
}

/// Build the screen and wire its handlers.  Called once from `start()`.
pub fn mount(
    document: &Document,
    client: Rc<ApiClient>,
    notify: Rc<dyn Notify>,
) -> Result<(), JsValue> {
    if document.get_element_by_id("chat-panel").is_some() {
        return Ok(());
    }

    let panel = document.create_element("div")?;
    panel.set_id("chat-panel");
    panel.set_class_name("chat-panel");
    panel.set_inner_html(&format!(
        r#"
        <ul id="{log}" class="input-log"></ul>
        <div class="chat-input-area">
            <input type="text" id="{input}" class="chat-input" placeholder="Type your input...">
            <button id="{send}" class="send-button">Send</button>
        </div>
    "#,
        log = LOG_ID,
        input = INPUT_ID,
        send = SEND_BUTTON_ID,
    ));

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("<body> element missing"))?;
    body.append_child(&panel)?;

    let controller = Rc::new(RefCell::new(controller()));
    let history: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    // Enter inside the input field triggers a submit.
    {
        let document_clone = document.clone();
        let controller = Rc::clone(&controller);
        let history = Rc::clone(&history);
        let client = Rc::clone(&client);
        let notify = Rc::clone(&notify);
        let keypress = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                submit_current(&document_clone, &controller, &history, &client, &notify);
            }
        }) as Box<dyn FnMut(_)>);
        dom_utils::element_by_id(document, INPUT_ID)?
            .add_event_listener_with_callback("keypress", keypress.as_ref().unchecked_ref())?;
        keypress.forget();
    }

    // Send button does the same.
    {
        let document_clone = document.clone();
        let controller = Rc::clone(&controller);
        let history = Rc::clone(&history);
        let click = Closure::wrap(Box::new(move |_: MouseEvent| {
            submit_current(&document_clone, &controller, &history, &client, &notify);
        }) as Box<dyn FnMut(_)>);
        dom_utils::element_by_id(document, SEND_BUTTON_ID)?
            .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();
    }

    Ok(())
}

fn submit_current(
    document: &Document,
    controller: &Rc<RefCell<FormController<ChatFields>>>,
    history: &Rc<RefCell<Vec<String>>>,
    client: &Rc<ApiClient>,
    notify: &Rc<dyn Notify>,
) {
    let input = match dom_utils::html_input(document, INPUT_ID) {
        Ok(input) => input,
        Err(err) => {
            crate::console_error!("chat input missing: {:?}", err);
            return;
        }
    };

    let text = input.value();
    let fields = ChatFields {
        text: text.clone(),
        history: history.borrow().clone(),
    };

    // Borrow scoped: the controller must be free again by the time the
    // response handler runs.
    let body = controller.borrow_mut().begin(&fields, notify.as_ref());
    let Some(body) = body else {
        return;
    };

    // Record intent before the call resolves; the chat screen clears the
    // field regardless of the eventual outcome.
    history.borrow_mut().push(text.clone());
    append_log_entry(document, &text);
    input.set_value("");

    let path = controller.borrow().submit_path();
    let controller = Rc::clone(controller);
    let client = Rc::clone(client);
    let notify = Rc::clone(notify);
    spawn_local(async move {
        let result = client.request(Method::Post, path, Some(&body)).await;
        controller.borrow_mut().finish(&result, notify.as_ref());
    });
}

fn append_log_entry(document: &Document, text: &str) {
    if let Ok(log) = dom_utils::element_by_id(document, LOG_ID) {
        if let Ok(entry) = document.create_element("li") {
            entry.set_text_content(Some(text));
            let _ = log.append_child(&entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_gates_blank_text() {
        let fields = ChatFields {
            text: " \t ".into(),
            history: vec!["earlier".into()],
        };
        assert_eq!(build(&fields), Err(FormError::BlankInput));
    }

    #[test]
    fn builder_produces_wire_shape() {
        let fields = ChatFields {
            text: "hello".into(),
            history: vec![],
        };
        let value = build(&fields).unwrap();
        assert_eq!(value["currentInput"], "hello");
        assert_eq!(value["inputHistory"], serde_json::json!(["hello"]));
        assert_eq!(value["totalInputs"], 1);
        assert!(value["timestamp"].is_string());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::network::GatewayConfig;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    struct SilentNotify;
    impl Notify for SilentNotify {
        fn notify(&self, _message: &str) {}
    }

    #[wasm_bindgen_test]
    fn mount_creates_the_input_panel_once() {
        let document = web_sys::window().unwrap().document().unwrap();
        let client = Rc::new(ApiClient::new(Rc::new(GatewayConfig::resolve(Some(
            "http://localhost:9",
        )))));
        let notify: Rc<dyn Notify> = Rc::new(SilentNotify);

        mount(&document, Rc::clone(&client), Rc::clone(&notify)).unwrap();
        mount(&document, client, notify).unwrap();

        assert!(document.get_element_by_id(INPUT_ID).is_some());
        assert_eq!(
            document.query_selector_all(".chat-panel").unwrap().length(),
            1
        );
    }
}
