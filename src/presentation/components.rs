use leptos::html::Canvas;
use leptos::*;

use super::chart_host::ChartHost;
use crate::domain::{chart::InitOptions, logging::LogComponent, market_data::RawCandle};
use crate::log_error;

/// Card with a static preview chart; clicking it opens an interactive chart in a modal.
#[component]
pub fn CandleChartCard(
    #[prop(into)] symbol: String,
    #[prop(into)] data: Signal<Vec<RawCandle>>,
    #[prop(default = 300)] height: u32,
) -> impl IntoView {
    let preview_ref = create_node_ref::<Canvas>();
    let modal_ref = create_node_ref::<Canvas>();
    let (open, set_open) = create_signal(false);

    let preview_host = store_value(ChartHost::new());
    let modal_host = store_value(ChartHost::new());

    create_effect(move |_| {
        let candles = data.get();
        let Some(canvas) = preview_ref.get() else { return };
        let canvas: &web_sys::HtmlCanvasElement = &canvas;
        let canvas = canvas.clone();
        preview_host.update_value(|host| {
            if let Err(err) = host.initialize(canvas, &candles, InitOptions::preview()) {
                log_error!(LogComponent::Presentation("CandleChartCard"), "preview failed: {}", err);
            }
        });
    });

    create_effect(move |_| {
        let candles = data.get();
        if !open.get() {
            modal_host.update_value(|host| host.dispose());
            return;
        }
        let Some(canvas) = modal_ref.get() else { return };
        let canvas: &web_sys::HtmlCanvasElement = &canvas;
        let canvas = canvas.clone();
        modal_host.update_value(|host| {
            let result = if host.is_running() {
                host.set_candles(&candles)
            } else {
                host.initialize(canvas, &candles, InitOptions::interactive()).map(|_| ())
            };
            if let Err(err) = result {
                log_error!(LogComponent::Presentation("CandleChartCard"), "interactive chart failed: {}", err);
            }
        });
    });

    on_cleanup(move || {
        preview_host.try_update_value(|host| host.dispose());
        modal_host.try_update_value(|host| host.dispose());
    });

    view! {
        <div class="candle-card">
            <div class="candle-card__header">
                <span class="candle-card__symbol">{symbol}</span>
                <button class="candle-card__expand" on:click=move |_| set_open.set(true)>
                    "Expand"
                </button>
            </div>
            <canvas
                node_ref=preview_ref
                class="candle-card__preview"
                style=format!("width: 100%; height: {}px;", height)
                on:click=move |_| set_open.set(true)
            />
            <Show when=move || open.get()>
                <div class="candle-card__backdrop" on:click=move |_| set_open.set(false)>
                    <div class="candle-card__modal" on:click=|ev| ev.stop_propagation()>
                        <button class="candle-card__close" on:click=move |_| set_open.set(false)>
                            "×"
                        </button>
                        <canvas node_ref=modal_ref class="candle-card__chart" style="width: 100%; height: 70vh;"/>
                    </div>
                </div>
            </Show>
        </div>
    }
}
