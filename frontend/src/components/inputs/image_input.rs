use gloo_console::error;
use gloo_file::futures::read_as_data_url;
use web_sys::{File, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::{INPUT_STYLE, LABEL_STYLE};

#[derive(Properties, PartialEq, Clone)]
pub struct ImageInputProps {
    pub id: AttrValue,
    pub label: AttrValue,
    /// Called with the chosen file, or `None` when the selection is cleared.
    pub on_file_change: Callback<Option<File>>,
}

pub enum Msg {
    FileChanged(Option<File>),
    PreviewReady { selection: u32, data_url: String },
}

/// File picker restricted to images, with a local preview of the pick.
///
/// Nothing is uploaded here; the chosen file is handed to the parent, and a
/// data URL is read in the background only to render the preview.
pub struct ImageInput {
    preview: Option<String>,
    /// Bumped on every change so a slow read of an earlier pick is ignored.
    selection: u32,
}

impl Component for ImageInput {
    type Message = Msg;
    type Properties = ImageInputProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            preview: None,
            selection: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChanged(file) => {
                self.selection += 1;
                self.preview = None;
                ctx.props().on_file_change.emit(file.clone());

                if let Some(file) = file {
                    let selection = self.selection;
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let file = gloo_file::File::from(file);
                        match read_as_data_url(&file).await {
                            Ok(data_url) => link.send_message(Msg::PreviewReady { selection, data_url }),
                            Err(e) => error!(format!("Erro ao ler imagem {}: {}", file.name(), e)),
                        }
                    });
                }
                true
            }
            Msg::PreviewReady { selection, data_url } => {
                if selection != self.selection {
                    return false;
                }
                self.preview = Some(data_url);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let onchange = ctx.link().callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::FileChanged(input.files().and_then(|files| files.get(0)))
        });

        html! {
            <div>
                <label for={props.id.clone()} style={LABEL_STYLE}>{ props.label.clone() }</label>
                <input
                    id={props.id.clone()}
                    type="file"
                    accept="image/*"
                    style={format!("{INPUT_STYLE}cursor:pointer;")}
                    {onchange}
                />
                {
                    if let Some(preview) = &self.preview {
                        html! {
                            <div style="margin:0 0 1rem 0;">
                                <img src={preview.clone()} alt="Preview" style="max-width:100%;height:auto;border-radius:0.5rem;" />
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}
