// Repository dashboard screen
use crate::domain::dashboard::Dashboard;
use crate::presentation::views::layout::*;
use maud::{html, Markup, PreEscaped};

const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";

// Draws every chart found in the #dashboard-charts data block.
const CHART_BOOT: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
  var charts = JSON.parse(document.getElementById('dashboard-charts').textContent);
  charts.forEach(function (chart) {
    var canvas = document.getElementById('chart-' + chart.id);
    if (!canvas || typeof Chart === 'undefined') { return; }
    new Chart(canvas, {
      type: chart.kind,
      data: {
        labels: chart.labels,
        datasets: [{
          label: chart.title,
          data: chart.data,
          borderColor: chart.border_color || undefined,
          backgroundColor: chart.background_color || undefined,
          fill: !!chart.background_color
        }]
      },
      options: {
        responsive: true,
        plugins: { legend: { display: chart.legend } },
        scales: { y: { beginAtZero: false, ticks: { callback: function (v) { return v.toLocaleString('hu-HU'); } } } }
      }
    });
  });
});
"#;

pub fn dashboard(dashboard: &Dashboard) -> Markup {
    let repository = &dashboard.repository;
    repository_page(
        &repository.name,
        &repository.id,
        RepositoryTab::Dashboard,
        html! {
            section.section {
                .container.content {
                    h2.title.is-spaced { (repository.name) }
                    @if !repository.description.is_empty() {
                        p.subtitle { (repository.description) }
                    }
                    @if dashboard.charts.is_empty() {
                        (notification("info", "No dashboard charts are available."))
                    }
                    @for chart in &dashboard.charts {
                        .box {
                            h3 { (chart.title) " (" (dashboard.year) ")" }
                            canvas id=(format!("chart-{}", chart.id)) {}
                            table.table.is-narrow."is-size-7" {
                                tbody {
                                    @for (label, value) in chart.labels.iter().zip(&chart.data) {
                                        tr {
                                            th { (label) }
                                            td.has-text-right { (fmt_amount(*value)) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            (json_script("dashboard-charts", &dashboard.charts))
            script src=(CHART_JS) {}
            script { (PreEscaped(CHART_BOOT)) }
        },
    )
}
