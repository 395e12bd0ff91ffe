//! Model preview: static image, interactive 3D canvas, or placeholder.
//!
//! ARCHITECTURE
//! ============
//! The `viewer` crate owns projection and drawing. This component only picks
//! the preview branch and forwards pointer/wheel input to the viewer, then
//! redraws.

use leptos::prelude::*;
use viewer::file::BBModelFile;
#[cfg(feature = "hydrate")]
use viewer::{camera::Point, view::Viewer};

/// Pick a preview for a model.
///
/// Geometry wins over a preview image; with neither, a placeholder is shown.
#[component]
pub fn ModelViewer(
    #[prop(into)] preview_url: Signal<Option<String>>,
    #[prop(into)] file: Signal<Option<BBModelFile>>,
) -> impl IntoView {
    move || match (file.get(), preview_url.get()) {
        (Some(file), _) => view! { <ModelCanvas file=file/> }.into_any(),
        (None, Some(url)) => view! {
            <div class="model-viewer">
                <img class="model-viewer__image" src=url alt="Model preview"/>
            </div>
        }
        .into_any(),
        (None, None) => view! {
            <div class="model-viewer model-viewer--empty">
                <p>"No preview available"</p>
            </div>
        }
        .into_any(),
    }
}

/// Interactive canvas for one parsed bbmodel document.
#[component]
fn ModelCanvas(file: BBModelFile) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    let host = std::rc::Rc::new(std::cell::RefCell::new(None::<Viewer>));

    #[cfg(feature = "hydrate")]
    {
        let host = std::rc::Rc::clone(&host);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if host.borrow().is_some() {
                return;
            }
            let mut instance = Viewer::new(canvas);
            sync_viewport(&mut instance, &canvas_ref);
            instance.core.load_file(&file, || js_sys::Math::random() * 360.0);
            render(&instance);
            *host.borrow_mut() = Some(instance);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = file;

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let host = std::rc::Rc::clone(&host);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                if let Some(canvas) = canvas_ref.get() {
                    let _ = canvas.set_pointer_capture(ev.pointer_id());
                }
                if let Some(viewer) = host.borrow_mut().as_mut() {
                    viewer.core.on_pointer_down(pointer_point(&ev));
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let host = std::rc::Rc::clone(&host);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(viewer) = host.borrow_mut().as_mut() {
                    if viewer.core.on_pointer_move(pointer_point(&ev)) {
                        render(viewer);
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let host = std::rc::Rc::clone(&host);
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(viewer) = host.borrow_mut().as_mut() {
                    viewer.core.on_pointer_up();
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_wheel = {
        #[cfg(feature = "hydrate")]
        {
            let host = std::rc::Rc::clone(&host);
            move |ev: leptos::ev::WheelEvent| {
                ev.prevent_default();
                if let Some(viewer) = host.borrow_mut().as_mut() {
                    sync_viewport(viewer, &canvas_ref);
                    viewer.core.on_wheel(ev.delta_y());
                    render(viewer);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    view! {
        <div class="model-viewer">
            <canvas
                class="model-viewer__canvas"
                node_ref=canvas_ref
                on:pointerdown=on_pointer_down
                on:pointermove=on_pointer_move
                on:pointerup=on_pointer_up.clone()
                on:pointerleave=on_pointer_up
                on:wheel=on_wheel
            >
                "Your browser does not support canvas."
            </canvas>
            <p class="model-viewer__hint">"Drag to rotate, scroll to zoom"</p>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn sync_viewport(viewer: &mut Viewer, canvas_ref: &NodeRef<leptos::html::Canvas>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(canvas) = canvas_ref.get_untracked() else {
        return;
    };
    let width = f64::from(canvas.client_width()).max(1.0);
    let height = f64::from(canvas.client_height()).max(1.0);
    viewer.set_viewport(width, height, window.device_pixel_ratio().max(1.0));
}

#[cfg(feature = "hydrate")]
fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "hydrate")]
fn render(viewer: &Viewer) {
    if let Err(e) = viewer.render() {
        log::warn!("viewer: render failed: {e:?}");
    }
}
