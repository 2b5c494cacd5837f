use contracts::dashboards::feedback::{
    report_sub_categories, ReportData, ReportFilter, ReportFormat, ALL_CATEGORIES,
    REPORT_CATEGORIES,
};
use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::dashboards::feedback::api;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::load::{spawn_load, LoadState};
use crate::shared::page_frame::{LoadError, PageFrame};
use crate::system::auth::use_session;

pub const DOWNLOAD_REFUSED: &str = "No tienes permiso para descargar este informe.";

/// Message shown after pressing "Descargar". `Err` when the role may not
/// download; anonymous visitors never may.
pub fn download_outcome(role: Option<Role>, report: &ReportData) -> Result<String, String> {
    match role {
        Some(role) if role.can_download_reports() => Ok(format!(
            "Descargando: {} ({})",
            report.title,
            report.format.as_str()
        )),
        _ => Err(DOWNLOAD_REFUSED.to_string()),
    }
}

#[component]
pub fn ReportsPanel() -> impl IntoView {
    let session = use_session();
    let data = RwSignal::new(LoadState::<Vec<ReportData>>::Loading);
    spawn_load(data, api::get_reports());

    let filter = RwSignal::new(ReportFilter::default());
    let notice = RwSignal::new(None::<Result<String, String>>);

    let visible = Memo::new(move |_| {
        data.with(|state| {
            state
                .ready()
                .map(|reports| filter.with(|f| f.apply(reports)))
                .unwrap_or_default()
        })
    });

    let can_download =
        move || session.record().map(|r| r.role.can_download_reports()).unwrap_or(false);

    let download = move |report: ReportData| {
        let role = session.record().map(|r| r.role);
        let outcome = download_outcome(role, &report);
        match &outcome {
            Ok(_) => log::info!("download requested: {}", report.id),
            Err(_) => log::info!("download refused: {}", report.id),
        }
        notice.set(Some(outcome));
    };

    let selected_category = move || {
        filter.with(|f| f.category.clone().unwrap_or_else(|| ALL_CATEGORIES.to_string()))
    };

    let category_buttons = REPORT_CATEGORIES
        .into_iter()
        .map(|category| {
            view! {
                <button
                    class="chip"
                    class:chip--active=move || selected_category() == category
                    on:click=move |_| filter.update(|f| f.select_category(category))
                >
                    {category}
                </button>
            }
        })
        .collect_view();

    let sub_category_panel = move || {
        let category = selected_category();
        let subs = report_sub_categories(&category);
        if category == ALL_CATEGORIES {
            view! { <p class="muted">"Selecciona una categoría principal para ver subcategorías."</p> }
                .into_any()
        } else if subs.is_empty() {
            view! { <p class="muted">"No hay subcategorías para esta categoría."</p> }.into_any()
        } else {
            subs.iter()
                .copied()
                .map(|sub| {
                    view! {
                        <button
                            class="chip chip--block"
                            class:chip--active=move || {
                                filter.with(|f| f.sub_category.as_deref() == Some(sub))
                            }
                            on:click=move |_| filter.update(|f| f.sub_category = Some(sub.to_string()))
                        >
                            {sub}
                        </button>
                    }
                })
                .collect_view()
                .into_any()
        }
    };

    let rows = move || {
        visible
            .get()
            .into_iter()
            .map(|report| {
                let format_icon = match report.format {
                    ReportFormat::Pdf => "file-text",
                    ReportFormat::Excel => "bar-chart",
                };
                let for_click = report.clone();
                view! {
                    <tr>
                        <td>
                            {report.is_new.then(|| view! { <span class="badge badge--new">"Nuevo"</span> })}
                            {report.title.clone()}
                        </td>
                        <td title=report.format.as_str()>{icon(format_icon)}</td>
                        <td>{format_date(report.upload_date)}</td>
                        <td class="num">
                            <button
                                class="button button--outline button--small"
                                disabled=move || !can_download()
                                on:click=move |_| download(for_click.clone())
                            >
                                {icon("download")}
                                "Descargar"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <PageFrame page_id="dashboard--reports".to_string() title="Informes">
            <div class="search">
                {icon("search")}
                <input
                    class="search__input"
                    placeholder="Buscar archivos..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                />
            </div>

            <div class="chip-row">{category_buttons}</div>

            {move || notice.get().map(|n| match n {
                Ok(msg) => view! { <div class="alert alert--info">{msg}</div> }.into_any(),
                Err(msg) => view! { <div class="alert alert--error">{msg}</div> }.into_any(),
            })}

            <div class="reports-layout">
                <div class="card reports-layout__aside">{sub_category_panel}</div>
                <div class="card">
                    <h3 class="card__title">"Resultados de la búsqueda"</h3>
                    {move || match data.get() {
                        LoadState::Loading => view! { <p class="muted">"Cargando informes..."</p> }.into_any(),
                        LoadState::Failed(e) => view! { <LoadError message=e /> }.into_any(),
                        LoadState::Ready(_) if visible.with(Vec::is_empty) => view! {
                            <p class="muted">"No se encontraron informes que coincidan con los filtros."</p>
                        }
                        .into_any(),
                        LoadState::Ready(_) => view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Título"</th>
                                        <th>"Tipo"</th>
                                        <th>"Fecha de Subida"</th>
                                        <th class="num">"Acciones"</th>
                                    </tr>
                                </thead>
                                <tbody>{rows}</tbody>
                            </table>
                        }
                        .into_any(),
                    }}
                </div>
            </div>

            <div class="note">
                <strong>"Nota sobre permisos:"</strong>
                <ul>
                    <li>"Los usuarios con rol \"HR Manager\" y \"HR Analyst\" pueden ver y descargar todos los informes."</li>
                    <li>"Los usuarios con rol \"Viewer\" solo pueden ver los informes, pero no tienen acceso a la descarga."</li>
                </ul>
            </div>
        </PageFrame>
    }
}
