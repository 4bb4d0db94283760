// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Result;
use easel_core::{
    Dispatchable, DispatcherConfig, Event, EventHandler, EventInit, Listener, ListenerOptions,
};
use easel_display::{events, DisplayObject};
use std::cell::Cell;
use std::rc::Rc;

/// Counts clicks that reach the stage and vetoes the default after a limit.
struct ClickBudget {
    remaining: Cell<u32>,
}

impl EventHandler for ClickBudget {
    fn handle_event(&self, event: &mut Event) -> Result<()> {
        match self.remaining.get() {
            0 => {
                log::warn!("Click budget exhausted, cancelling {event}.");
                event.prevent_default();
            }
            left => self.remaining.set(left - 1),
        }
        Ok(())
    }
}

fn phase_logger(label: &'static str) -> Listener {
    Listener::function(move |event| {
        log::info!(
            "{label}: {} during {:?} (target {:?})",
            event.event_type(),
            event.phase(),
            event.target()
        );
        Ok(())
    })
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = DispatcherConfig {
        trace_dispatch: true,
        ..DispatcherConfig::default()
    };
    let stage = DisplayObject::with_config("stage", config);
    let hud = DisplayObject::with_config("hud", config);
    let button = DisplayObject::with_config("button", config);

    button.on(
        events::ADDED,
        |event, data| {
            let greeting = data.and_then(|d| d.downcast_ref::<&str>()).copied();
            log::info!("{event} reached the button: {}", greeting.unwrap_or("-"));
            Ok(())
        },
        ListenerOptions::new().once().with_data("ready"),
    );

    stage.add_child(&hud)?;
    hud.add_child(&button)?;

    stage.add_event_listener("click", phase_logger("stage capture"), true);
    hud.add_event_listener("click", phase_logger("hud"), false);
    button.add_event_listener("click", phase_logger("button"), false);
    stage.add_event_listener(
        "click",
        Listener::handler(Rc::new(ClickBudget {
            remaining: Cell::new(2),
        })),
        false,
    );

    for round in 1..=3 {
        let proceed = button.dispatch("click", EventInit::new(true, true))?;
        log::info!("Click {round}: default action {}", if proceed { "runs" } else { "cancelled" });
    }

    stage.remove_child(&hud)?;
    log::info!(
        "Hud detached; stage still contains the button: {}",
        stage.contains(&button)
    );
    Ok(())
}
