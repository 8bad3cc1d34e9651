//! HTML rendering for the form page.
//!
//! `render_page` is a pure function of a `FormView` snapshot. All user and
//! model text goes through maud's escaping.

pub mod gauge;

use maud::{html, Markup, DOCTYPE};

use crate::analysis::models::AnalysisResult;
use crate::form::controller::{FormView, RequestState};
use gauge::{circumference, dash_offset, ScoreBand, GAUGE_RADIUS};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-xl border border-slate-200 \
    focus:border-indigo-500 focus:ring-2 focus:ring-indigo-200 outline-none bg-slate-50 focus:bg-white";

pub fn render_page(view: &FormView) -> Markup {
    html! {
        (DOCTYPE)
        html lang="zh-CN" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "TitleMaster AI" }
                script src=(TAILWIND_CDN) {}
            }
            body class="min-h-screen bg-slate-50 text-slate-900 pb-20" {
                header class="bg-gradient-to-r from-indigo-600 to-purple-600 text-white pb-24 pt-12 px-4 shadow-lg" {
                    div class="max-w-4xl mx-auto text-center" {
                        h1 class="text-4xl md:text-5xl font-extrabold tracking-tight mb-4" { "TitleMaster AI" }
                        p class="text-lg md:text-xl text-indigo-100 max-w-2xl mx-auto" {
                            "让您的内容脱颖而出。智能分析，一键优化，打造爆款标题与简介。"
                        }
                    }
                }
                main class="max-w-4xl mx-auto px-4 -mt-16 relative z-10" {
                    div class="bg-white rounded-3xl shadow-xl overflow-hidden border border-slate-100" {
                        (form_section(view))
                        @match &view.state {
                            RequestState::Error { message } => { (error_banner(message)) }
                            _ => {}
                        }
                    }
                    div class="mt-8" {
                        @match &view.state {
                            RequestState::Success { result } => { (result_section(result)) }
                            _ => {}
                        }
                    }
                }
                footer class="mt-12 text-center text-slate-400 text-sm" {
                    p { "TitleMaster AI. Powered by Google Gemini." }
                }
            }
        }
    }
}

fn form_section(view: &FormView) -> Markup {
    let loading = view.state.is_loading();
    let input = &view.input;

    html! {
        div class="p-8 md:p-10" {
            form method="post" action="/" class="space-y-6" {
                div class="grid grid-cols-1 md:grid-cols-3 gap-6" {
                    div class="md:col-span-1" {
                        label for="topic" class="block text-sm font-semibold text-slate-700 mb-2" {
                            "主题 / 领域 "
                            span class="text-slate-400 font-normal" { "(选填)" }
                        }
                        input type="text" id="topic" name="topic" value=(input.topic)
                            placeholder="例如：数码科技" class=(INPUT_CLASS);
                    }
                    div class="md:col-span-2" {
                        label for="currentTitle" class="block text-sm font-semibold text-slate-700 mb-2" {
                            "当前标题 "
                            span class="text-red-500" { "*" }
                        }
                        input type="text" id="currentTitle" name="currentTitle" value=(input.current_title)
                            placeholder="例如：iPhone 15 评测" class=(INPUT_CLASS) required;
                        @if let Some(message) = &view.validation_message {
                            p id="validation-message" class="mt-2 text-sm text-red-600" { (message) }
                        }
                    }
                }
                div {
                    label for="currentDescription" class="block text-sm font-semibold text-slate-700 mb-2" {
                        "当前简介/正文摘要"
                    }
                    textarea id="currentDescription" name="currentDescription" rows="4"
                        placeholder="输入现有的简介或一段主要内容，AI 将帮助您优化描述..."
                        class={ (INPUT_CLASS) " resize-none" } {
                        (input.current_description)
                    }
                }
                div class="pt-2" {
                    @if loading {
                        button type="submit" disabled
                            class="w-full py-4 rounded-xl text-white font-bold text-lg bg-slate-400 cursor-not-allowed" {
                            "AI 正在深度分析..."
                        }
                    } @else {
                        button type="submit"
                            class="w-full py-4 rounded-xl text-white font-bold text-lg shadow-lg bg-gradient-to-r from-indigo-600 to-purple-600" {
                            "立即优化"
                        }
                    }
                }
            }
        }
    }
}

fn error_banner(message: &str) -> Markup {
    html! {
        div id="error-banner" class="bg-red-50 border-l-4 border-red-500 p-4 m-8 mb-0 rounded-r-lg" {
            p class="text-sm text-red-700" { (message) }
        }
    }
}

fn result_section(result: &AnalysisResult) -> Markup {
    html! {
        div class="space-y-8" {
            div class="bg-white rounded-2xl p-6 shadow-md border border-slate-100 flex flex-col md:flex-row items-center gap-8" {
                div class="flex-shrink-0" { (score_gauge(result.score)) }
                div class="flex-1 text-center md:text-left" {
                    h3 class="text-lg font-semibold text-slate-800 mb-2" { "AI 诊断点评" }
                    p class="text-slate-600 leading-relaxed bg-slate-50 p-4 rounded-lg border border-slate-200" {
                        "\u{201c}" (result.critique) "\u{201d}"
                    }
                }
            }
            div class="grid md:grid-cols-2 gap-6" {
                div class="bg-white rounded-2xl shadow-md border border-slate-100 overflow-hidden" {
                    div class="bg-indigo-50 px-6 py-4 border-b border-indigo-100" {
                        h3 class="font-semibold text-indigo-900" { "推荐爆款标题" }
                    }
                    ul id="improved-titles" class="p-6 space-y-4" {
                        @for (index, title) in result.improved_titles.iter().enumerate() {
                            li class="flex gap-3 items-start" {
                                span class="flex-shrink-0 w-6 h-6 rounded-full bg-indigo-100 text-indigo-600 flex items-center justify-center text-xs font-bold" {
                                    (index + 1)
                                }
                                span class="text-slate-700 font-medium select-all" { (title) }
                            }
                        }
                    }
                }
                div class="bg-white rounded-2xl shadow-md border border-slate-100 overflow-hidden" {
                    div class="bg-purple-50 px-6 py-4 border-b border-purple-100" {
                        h3 class="font-semibold text-purple-900" { "精选简介优化" }
                    }
                    ul id="improved-descriptions" class="p-6 space-y-6" {
                        @for (index, description) in result.improved_descriptions.iter().enumerate() {
                            li class="flex gap-3 items-start" {
                                span class="flex-shrink-0 w-6 h-6 rounded-full bg-purple-100 text-purple-600 flex items-center justify-center text-xs font-bold" {
                                    (description_label(index))
                                }
                                p class="text-slate-600 text-sm leading-relaxed select-all" { (description) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn score_gauge(score: i64) -> Markup {
    let band = ScoreBand::from_score(score);
    let c = circumference();

    html! {
        div class="relative w-32 h-32" {
            svg class="w-full h-full -rotate-90" viewBox="0 0 128 128" {
                circle cx="64" cy="64" r=(GAUGE_RADIUS) stroke="#e2e8f0" stroke-width="8" fill="transparent" {}
                circle cx="64" cy="64" r=(GAUGE_RADIUS) stroke=(band.stroke_color()) stroke-width="8"
                    fill="transparent" stroke-dasharray=(format!("{c:.2}"))
                    stroke-dashoffset=(format!("{:.2}", dash_offset(score))) stroke-linecap="round" {}
            }
            div class="absolute inset-0 flex flex-col items-center justify-center" {
                span id="score" class={ "text-3xl font-bold " (band.text_class()) } { (score) }
                span class="text-xs text-slate-400 font-semibold" { "得分" }
            }
        }
    }
}

/// A, B, C … for the first 26 entries, then plain numbers.
fn description_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        _ => (index + 1).to_string(),
    }
}
