use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{INPUT_STYLE, LABEL_STYLE};

/// Properties of a labeled text or number input.
#[derive(Properties, PartialEq, Clone)]
pub struct FieldInputProps {
    /// DOM id, also used by the label's `for`.
    pub id: AttrValue,
    pub label: AttrValue,
    /// `"text"` or `"number"`.
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    /// Receives the raw input text on every keystroke.
    pub on_input: Callback<String>,
}

/// Presentational input: renders a label and an input, and reports edits
/// upwards. Holds no state of its own.
pub struct FieldInput;

impl Component for FieldInput {
    type Message = ();
    type Properties = FieldInputProps;

    fn create(_ctx: &Context<Self>) -> Self {
        FieldInput
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_input = props.on_input.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        });

        html! {
            <div>
                <label for={props.id.clone()} style={LABEL_STYLE}>{ props.label.clone() }</label>
                <input
                    id={props.id.clone()}
                    type={props.input_type.clone()}
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    style={INPUT_STYLE}
                    {oninput}
                />
            </div>
        }
    }
}
