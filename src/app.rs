use leptos::*;
use wasm_bindgen::JsCast;

use crate::{
    application::RateBoardCoordinator,
    config::BoardConfig,
    domain::{
        errors::{AppError, AppResult},
        logging::{LogComponent, get_logger},
        rates::{RateCard, RenderResult},
    },
    infrastructure::EmbeddedRateRepository,
    log_info,
};

/// Element the board mounts into; pages without it only use `RateBoardApi`
pub const ROOT_ELEMENT_ID: &str = "rate-board-root";

const BOARD_STYLES: &str = r#"
.rate-board {
    font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
    background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
    min-height: 100vh;
    padding: 20px;
    color: white;
}

.header {
    text-align: center;
    margin-bottom: 20px;
    background: rgba(255, 255, 255, 0.1);
    backdrop-filter: blur(10px);
    padding: 20px;
    border-radius: 15px;
    border: 1px solid rgba(255, 255, 255, 0.2);
}

.search-input {
    display: block;
    width: 100%;
    max-width: 480px;
    margin: 0 auto 20px;
    padding: 12px 16px;
    border-radius: 10px;
    border: 1px solid #4a5d73;
    font-size: 16px;
}

.stats {
    display: flex;
    justify-content: center;
    gap: 40px;
    margin-bottom: 10px;
}

.stat-item {
    text-align: center;
}

.stat-value {
    font-size: 24px;
    font-weight: 700;
    color: #72c685;
    font-family: 'Courier New', monospace;
}

.stat-label {
    font-size: 12px;
    color: #a0a0a0;
    margin-top: 5px;
}

.result-count {
    text-align: center;
    font-size: 13px;
    color: #c0c0c0;
    margin-bottom: 20px;
}

.rate-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
    gap: 15px;
}

.rate-card {
    background: rgba(0, 0, 0, 0.35);
    border: 1px solid #4a5d73;
    border-radius: 10px;
    padding: 15px;
}

.card-header {
    display: flex;
    align-items: center;
    gap: 8px;
    font-weight: 600;
}

.flag {
    font-size: 24px;
}

.currency {
    margin-left: auto;
    font-size: 11px;
    color: #a0a0a0;
}

.rate-value {
    font-size: 28px;
    font-weight: 700;
    margin: 10px 0;
}

.rate-meta {
    display: flex;
    justify-content: space-between;
    font-size: 12px;
    color: #c0c0c0;
}

.change-up { color: #e74c3c; }
.change-down { color: #3498db; }
.change-none { color: #a0a0a0; }
"#;

/// Mount the board into `#rate-board-root` over the bundled dataset.
pub fn mount_rate_board(config: &BoardConfig) -> AppResult<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| AppError::Presentation("document not available".to_string()))?;

    let Some(root) = document.get_element_by_id(ROOT_ELEMENT_ID) else {
        get_logger().debug(
            LogComponent::Presentation("App"),
            &format!("No #{} element, skipping mount", ROOT_ELEMENT_ID),
        );
        return Ok(());
    };
    let root = root
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| AppError::Presentation(format!("#{} is not an HTML element", ROOT_ELEMENT_ID)))?;

    let coordinator = RateBoardCoordinator::from_repository(&EmbeddedRateRepository)?;
    let initial_search = config.initial_search.clone();
    mount_to(root, move || view! { <App coordinator=coordinator initial_search=initial_search /> });

    log_info!(LogComponent::Presentation("App"), "🚀 Rate board mounted into #{}", ROOT_ELEMENT_ID);
    Ok(())
}

/// Search field, statistics and card grid. Every keystroke replaces the
/// whole card list with a fresh render.
#[component]
pub fn App(coordinator: RateBoardCoordinator, #[prop(optional, into)] initial_search: String) -> impl IntoView {
    let mut coordinator = coordinator;
    let first_render = coordinator.handle_search_input(&initial_search);
    let coordinator = store_value(coordinator);

    let (search, set_search) = create_signal(initial_search);
    let (board, set_board) = create_signal(first_render);

    let on_input = move |ev: ev::Event| {
        let term = event_target_value(&ev);
        let next = coordinator
            .try_update_value(|coordinator| coordinator.handle_search_input(&term))
            .unwrap_or_default();
        set_search.set(term);
        set_board.set(next);
    };

    view! {
        <style>{BOARD_STYLES}</style>
        <div class="rate-board">
            <header class="header">
                <h1>"🌍 세계 각국 기준금리"</h1>
                <p>"각국 중앙은행 공식 발표 기준"</p>
            </header>
            <input
                type="text"
                class="search-input"
                placeholder="국가명 또는 국기로 검색..."
                prop:value=move || search.get()
                on:input=on_input
            />
            <StatsPanel board=board />
            <div class="result-count">
                {move || format!("{}개 국가", board.with(|board| board.count))}
            </div>
            <div class="rate-grid">
                {move || {
                    board.with(|board| {
                        board
                            .cards
                            .iter()
                            .cloned()
                            .map(|card| view! { <RateCardView card=card /> })
                            .collect_view()
                    })
                }}
            </div>
        </div>
    }
}

#[component]
fn StatsPanel(board: ReadSignal<RenderResult>) -> impl IntoView {
    view! {
        <div class="stats">
            <div class="stat-item">
                <div class="stat-value">{move || board.with(|board| board.average.clone())}</div>
                <div class="stat-label">"평균 금리"</div>
            </div>
            <div class="stat-item">
                <div class="stat-value">{move || board.with(|board| board.max.clone())}</div>
                <div class="stat-label">"최고 금리"</div>
            </div>
            <div class="stat-item">
                <div class="stat-value">{move || board.with(|board| board.min.clone())}</div>
                <div class="stat-label">"최저 금리"</div>
            </div>
        </div>
    }
}

#[component]
fn RateCardView(card: RateCard) -> impl IntoView {
    let RateCard { country, flag, rate_text, date, change, currency } = card;
    let change_class = format!("rate-change {}", change.direction.css_class());
    let currency = (!currency.is_empty()).then(|| view! { <span class="currency">{currency}</span> });

    view! {
        <div class="rate-card">
            <div class="card-header">
                <span class="flag">{flag}</span>
                <span class="country">{country}</span>
                {currency}
            </div>
            <div class="rate-value">{rate_text}</div>
            <div class="rate-meta">
                <span class="date">{date}</span>
                <span class=change_class>{change.text}</span>
            </div>
        </div>
    }
}
