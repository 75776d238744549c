use console_contract::{OutputEntry, OutputPayload};
use web_sys::KeyboardEvent;

use super::*;
use crate::{
    content::SectionBody,
    host::{CONSOLE_INPUT_DOM_ID, CONSOLE_TRANSCRIPT_DOM_ID},
};

#[component]
pub(super) fn ConsoleBody() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let entries = move || state.with(|desktop| desktop.console.transcript().to_vec());
    let input = move || state.with(|desktop| desktop.console.input().to_string());

    let on_keydown = move |ev: KeyboardEvent| {
        let now = runtime.host.get_value().now();
        match ev.key().as_str() {
            "Enter" => {
                ev.prevent_default();
                runtime.dispatch_action(DesktopAction::SubmitInput { now });
            }
            "Tab" => {
                ev.prevent_default();
                runtime.dispatch_action(DesktopAction::CompleteInput);
            }
            "ArrowUp" => {
                ev.prevent_default();
                runtime.dispatch_action(DesktopAction::HistoryPrevious);
            }
            "ArrowDown" => {
                ev.prevent_default();
                runtime.dispatch_action(DesktopAction::HistoryNext);
            }
            "ArrowLeft" | "ArrowRight" => {
                let input_empty = state.with_untracked(|desktop| desktop.console.input().is_empty());
                if input_empty {
                    ev.prevent_default();
                    let delta = if ev.key() == "ArrowRight" { 1 } else { -1 };
                    runtime.dispatch_action(DesktopAction::NavigateSection { delta, now });
                }
            }
            _ => {}
        }
    };

    view! {
        <div class="console">
            <div
                id=CONSOLE_TRANSCRIPT_DOM_ID
                class="console-output"
                role="log"
                aria-live="polite"
            >
                <For each=entries key=|entry| entry.id let:entry>
                    <TranscriptEntry entry=entry />
                </For>
            </div>
            <div class="console-input-row">
                <label class="console-prompt" for=CONSOLE_INPUT_DOM_ID>
                    ">"
                </label>
                <input
                    id=CONSOLE_INPUT_DOM_ID
                    class="console-input"
                    type="text"
                    prop:value=input
                    on:input=move |ev| {
                        runtime.dispatch_action(DesktopAction::SetInput {
                            text: event_target_value(&ev),
                        })
                    }
                    on:keydown=on_keydown
                    autocomplete="off"
                    spellcheck="false"
                    aria-label="Console command"
                />
            </div>
        </div>
    }
}

#[component]
fn TranscriptEntry(entry: OutputEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let body = match entry.payload {
        OutputPayload::Welcome => view! {
            <div class="welcome-message">
                <p>"Welcome to the Portfolio Terminal"</p>
                <p>
                    "Type " <span class="command-highlight">"help"</span>
                    " to see available commands"
                </p>
                <p>
                    "Use " <span class="command-highlight">"TAB"</span>
                    " to autocomplete commands"
                </p>
            </div>
        }
        .into_view(),
        OutputPayload::Echo { text } => view! {
            <div class="command-entry">
                <span class="console-prompt">">"</span>
                <span class="command-text">{text}</span>
            </div>
        }
        .into_view(),
        OutputPayload::Help { commands } => view! {
            <div class="help-content">
                <p>"Available commands:"</p>
                <ul class="command-list">
                    {commands
                        .into_iter()
                        .map(|command| view! {
                            <li>
                                <span class="command-highlight">{command.name}</span>
                                " - "
                                {command.summary}
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        }
        .into_view(),
        OutputPayload::SectionList { sections } => view! {
            <div class="sections-list">
                <p>"Available sections:"</p>
                <ul class="sections-list-items">
                    {sections
                        .into_iter()
                        .map(|row| {
                            if row.active {
                                view! {
                                    <li class="active-section">
                                        <span class="section-prefix">{row.marker()}</span>
                                        {row.label()}
                                    </li>
                                }
                            } else {
                                view! { <li>{row.marker()} {row.label()}</li> }
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        }
        .into_view(),
        OutputPayload::Time { text } => view! {
            <p class="output">{format!("Current time: {text}")}</p>
        }
        .into_view(),
        OutputPayload::Section { section } => {
            let body = runtime
                .content
                .with_value(|provider| provider.section_body(section));
            render_section_body(body)
        }
        OutputPayload::UnknownCommand { input } => view! {
            <p class="error-message">
                {format!("unknown command: {input}")} ". Type "
                <span class="command-highlight">"help"</span>
                " to see available commands."
            </p>
        }
        .into_view(),
    };

    view! { <div class="output-item">{body}</div> }
}

fn render_section_body(body: SectionBody) -> View {
    match body {
        SectionBody::Home { banner, profile } => view! {
            <div class="neofetch-output">
                <pre class="ascii-art">{banner}</pre>
                <div class="neofetch-info">
                    <p><span class="info-label">"Name: "</span>{profile.name}</p>
                    <p><span class="info-label">"Email: "</span>{profile.email}</p>
                    <p><span class="info-label">"Role: "</span>{profile.role}</p>
                    <p><span class="info-label">"Location: "</span>{profile.location}</p>
                </div>
            </div>
        }
        .into_view(),
        SectionBody::About { paragraphs } => view! {
            <div class="about-content">
                <h2>"About Me"</h2>
                {paragraphs.into_iter().map(|text| view! { <p>{text}</p> }).collect_view()}
            </div>
        }
        .into_view(),
        SectionBody::Education { items } => view! {
            <div class="education-content">
                <h2>"Education"</h2>
                {items
                    .into_iter()
                    .map(|item| view! {
                        <div class="education-item">
                            <p class="category-title">{item.degree}</p>
                            <p>{format!("{} | {}", item.school, item.years)}</p>
                            {item.notes.into_iter().map(|note| view! { <p>{note}</p> }).collect_view()}
                        </div>
                    })
                    .collect_view()}
            </div>
        }
        .into_view(),
        SectionBody::Skills { categories } => view! {
            <div class="skills-content">
                <h2>"Skills"</h2>
                {categories
                    .into_iter()
                    .map(|category| view! {
                        <div class="skills-category">
                            <p class="category-title">{category.title}</p>
                            <ul class="output-list">
                                {category
                                    .skills
                                    .into_iter()
                                    .map(|skill| {
                                        let bar = skill.bar();
                                        view! {
                                            <li class="output" title=skill.level>
                                                {format!("{} {bar}", skill.name)}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>
        }
        .into_view(),
        SectionBody::Experience { items } => view! {
            <div class="experience-content">
                <h2>"Experience"</h2>
                {items
                    .into_iter()
                    .map(|item| view! {
                        <div class="experience-item">
                            <p class="category-title">{item.title}</p>
                            <p>{format!("{} | {}", item.employer, item.years)}</p>
                            <ul class="output-list">
                                {item
                                    .highlights
                                    .into_iter()
                                    .map(|line| view! { <li class="output">{line}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>
        }
        .into_view(),
        SectionBody::Projects { items, placeholder } => {
            let empty = items.is_empty();
            view! {
                <div class="projects-content">
                    <h2>"Projects"</h2>
                    {empty.then(|| view! { <p class="under-construction">{placeholder}</p> })}
                    {items
                        .into_iter()
                        .map(|item| view! {
                            <div class="project-item">
                                <p class="category-title">{item.name}</p>
                                <p>{item.summary}</p>
                                {item.url.map(|url| view! {
                                    <a href=url target="_blank" rel="noopener noreferrer">"View project"</a>
                                })}
                            </div>
                        })
                        .collect_view()}
                </div>
            }
            .into_view()
        }
        SectionBody::Contact { lines, links } => view! {
            <div class="contact-content">
                <h2>"Contact"</h2>
                <div class="contact-item">
                    {lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                    <p class="contact-links">
                        {links
                            .into_iter()
                            .map(|link| view! {
                                <a href=link.href target="_blank" rel="noopener noreferrer">{link.label}</a>
                                " "
                            })
                            .collect_view()}
                    </p>
                </div>
            </div>
        }
        .into_view(),
    }
}
