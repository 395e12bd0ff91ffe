//! Public landing page.

use leptos::prelude::*;

use crate::components::header::Header;

struct Feature {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "🤖",
        title: "AI-Powered Generation",
        body: "Describe a model in plain language and get a structured Blockbench model with sensible proportions.",
    },
    Feature {
        icon: "🎬",
        title: "Automatic Animations",
        body: "Pick a walk, idle, or attack cycle, or describe a custom animation to rig alongside the model.",
    },
    Feature {
        icon: "🎨",
        title: "Texture Generation",
        body: "Textures are generated to match the description and laid out for Blockbench UV editing.",
    },
];

const STEPS: [(&str, &str); 3] = [
    ("1. Describe Your Vision", "Write a prompt and choose the kind of model you want."),
    ("2. Let the AI Work", "Generation runs in the background; progress updates every few seconds."),
    ("3. Download and Edit", "Download the .bbmodel file and open it in Blockbench."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Header/>
        <main class="home-page">
            <section class="hero">
                <h1>"AI-Powered bbmodel Generator"</h1>
                <p class="hero__lead">
                    "Create 3D models for Blockbench with the power of AI. Describe what you want and get a complete bbmodel back."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary btn--large" href="/create">"Create a Model"</a>
                    <a class="btn btn--large" href="/register">"Sign Up"</a>
                </div>
            </section>

            <section class="features">
                <h2>"Key Features"</h2>
                <div class="features__grid">
                    {FEATURES
                        .iter()
                        .map(|f| {
                            view! {
                                <article class="feature-card">
                                    <div class="feature-card__icon">{f.icon}</div>
                                    <h3>{f.title}</h3>
                                    <p>{f.body}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="how-it-works">
                <h2>"How It Works"</h2>
                <ol class="how-it-works__steps">
                    {STEPS
                        .iter()
                        .map(|(title, body)| {
                            view! {
                                <li>
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ol>
            </section>

            <section class="cta">
                <h2>"Ready to build?"</h2>
                <a class="btn btn--primary btn--large" href="/register">"Get Started"</a>
            </section>
        </main>
    }
}
