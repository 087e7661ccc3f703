//! ViewModel for the order details page

use super::model;
use super::state::{self, FetchOutcome, LoadTracker, NavigationTarget, GENERIC_ERROR_KEY};
use crate::shared::download::{download_bytes, PDF_MIME};
use crate::shared::i18n::{use_i18n, I18n};
use crate::shared::notifications::{use_notifications, NotificationKind, Notifications};
use contracts::domain::a001_order::aggregate::{invoice_file_name, Order, OrderStatus};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Navigation hook handed in by the page (wraps `use_navigate`).
///
/// Owned by the page like every signal here: async tasks reach both only
/// through `try_*`, since the page may be gone when a request settles.
pub type Navigate = Callback<NavigationTarget>;

#[derive(Clone)]
pub struct OrderDetailsVm {
    pub order: RwSignal<Option<Order>>,
    pub loading: RwSignal<bool>,
    pub deleting: RwSignal<bool>,
    pub updating_status: RwSignal<bool>,
    pub downloading: RwSignal<bool>,
    tracker: RwSignal<LoadTracker>,

    i18n: I18n,
    notifications: Notifications,
}

impl OrderDetailsVm {
    pub fn new() -> Self {
        Self {
            order: RwSignal::new(None),
            loading: RwSignal::new(false),
            deleting: RwSignal::new(false),
            updating_status: RwSignal::new(false),
            downloading: RwSignal::new(false),
            tracker: RwSignal::new(LoadTracker::default()),
            i18n: use_i18n(),
            notifications: use_notifications(),
        }
    }

    pub fn is_busy(&self) -> Signal<bool> {
        let loading = self.loading;
        let deleting = self.deleting;
        Signal::derive(move || state::is_busy(loading.get(), deleting.get()))
    }

    pub fn order_id(&self) -> Option<String> {
        self.order.get_untracked().map(|o| o.to_string_id())
    }

    pub fn load(&self, id: String, navigate: Navigate) {
        if self.tracker.try_update(|t| t.begin(&id)) != Some(true) {
            log::debug!("Order {} is already loading", id);
            return;
        }
        self.loading.set(true);

        let vm = self.clone();
        spawn_local(async move {
            let result = model::fetch_order(&id).await;

            match vm.tracker.try_update(|t| t.finish(&id)) {
                Some(true) => {}
                // superseded by a newer load
                Some(false) => return,
                None => {
                    log::debug!("Order page closed before {} arrived", id);
                    return;
                }
            }
            vm.loading.try_set(false);

            match state::fetch_outcome(result) {
                FetchOutcome::Loaded(order) => {
                    vm.order.try_set(Some(order));
                }
                FetchOutcome::Redirect(target) => {
                    vm.order.try_set(None);
                    navigate.try_run(target);
                }
            }
        });
    }

    pub fn delete(&self, navigate: Navigate) {
        let Some(id) = state::delete_target(self.order_id(), self.deleting.get_untracked()) else {
            return;
        };
        self.deleting.set(true);

        let vm = self.clone();
        spawn_local(async move {
            let outcome = state::delete_outcome(model::delete_order(&id).await);
            vm.deleting.try_set(false);
            if outcome.kind == NotificationKind::Success {
                vm.order.try_set(None);
            }

            let t = vm.i18n.translator_untracked("order");
            let notifications = vm.notifications;
            state::settle_delete(
                &outcome,
                &t,
                |kind, text| match kind {
                    NotificationKind::Success => notifications.success(text),
                    NotificationKind::Error => notifications.error(text),
                },
                |target| {
                    navigate.try_run(target);
                },
            );
        });
    }

    pub fn change_status(&self, status: OrderStatus) {
        let Some(order) = self.order.get_untracked() else {
            return;
        };
        if order.status == status || self.updating_status.get_untracked() {
            return;
        }
        self.updating_status.set(true);

        let vm = self.clone();
        spawn_local(async move {
            let t = vm.i18n.translator_untracked("order");
            match model::update_status(&order.to_string_id(), status).await {
                Ok(updated) => {
                    vm.order.try_set(Some(updated));
                    vm.notifications.success(t.t("common:errors.status-updated"));
                }
                Err(e) => {
                    log::error!("Status update failed: {}", e);
                    vm.notifications.error(t.t(GENERIC_ERROR_KEY));
                }
            }
            vm.updating_status.try_set(false);
        });
    }

    pub fn download_invoice(&self) {
        let Some(id) = self.order_id() else {
            return;
        };
        if self.downloading.get_untracked() {
            return;
        }
        self.downloading.set(true);

        let vm = self.clone();
        spawn_local(async move {
            let result = model::fetch_invoice(&id)
                .await
                .and_then(|bytes| download_bytes(&bytes, PDF_MIME, &invoice_file_name(&id)));
            if let Err(e) = result {
                log::error!("Invoice download failed: {}", e);
                let t = vm.i18n.translator_untracked("order");
                vm.notifications.error(t.t("common:errors.invoice-failed"));
            }
            vm.downloading.try_set(false);
        });
    }
}
