use crate::models::Summary;
use std::num::NonZeroU32;

pub fn render_index(summary: &Summary, chart_svg: &str, average_days: NonZeroU32) -> String {
    INDEX_HTML
        .replace("{{TOTAL}}", &summary.total.to_string())
        .replace("{{TODAY}}", &summary.today.to_string())
        .replace("{{LISTING}}", &escape_html(&summary.listing))
        .replace("{{AVG_DAYS}}", &average_days.to_string())
        .replace("{{CHART}}", chart_svg)
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Event Tally</title>
  <style>
    :root {
      --bg: #f4f1ea;
      --ink: #23262b;
      --muted: #6d6a64;
      --line: #3f51b5;
      --card: #ffffff;
      --border: rgba(35, 38, 43, 0.1);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 28px 16px 40px;
    }

    main {
      width: min(720px, 100%);
      display: grid;
      gap: 22px;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .counters {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 14px;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 14px;
      padding: 16px;
    }

    .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .value {
      display: block;
      margin-top: 6px;
      font-size: 1.6rem;
      font-weight: 600;
    }

    .actions {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 12px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--line);
      color: white;
    }

    button.secondary {
      background: var(--ink);
    }

    .chart-line {
      fill: none;
      stroke: var(--line);
      stroke-width: 2;
    }

    .chart-axis {
      fill: none;
      stroke: #000;
      stroke-width: 1;
    }

    .chart-point {
      fill: var(--line);
    }

    .chart-label {
      fill: #000;
      font-size: 10px;
    }

    svg.chart {
      width: 100%;
      height: auto;
      display: block;
    }

    pre {
      margin: 0;
      font-size: 0.9rem;
      white-space: pre-wrap;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }
  </style>
</head>
<body>
  <main>
    <h1>Event Tally</h1>

    <section class="counters">
      <div class="card">
        <span class="label">Total</span>
        <span id="total" class="value">{{TOTAL}}</span>
      </div>
      <div class="card">
        <span class="label">Today</span>
        <span id="today" class="value">{{TODAY}}</span>
      </div>
      <div class="card">
        <span class="label">{{AVG_DAYS}}-day average</span>
        <span id="avg-value" class="value">--</span>
      </div>
    </section>

    <section class="actions">
      <form id="record-form" method="post" action="/events">
        <button id="add" type="submit">Record event</button>
      </form>
      <button id="avg" class="secondary" type="button">{{AVG_DAYS}}-day average</button>
    </section>

    <section class="card">
      <span class="label">Cumulative events since first record</span>
      <div id="chart">{{CHART}}</div>
    </section>

    <section class="card">
      <span class="label">Recent days</span>
      <pre id="list">{{LISTING}}</pre>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const totalEl = document.getElementById('total');
    const todayEl = document.getElementById('today');
    const listEl = document.getElementById('list');
    const chartEl = document.getElementById('chart');
    const avgEl = document.getElementById('avg-value');
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const showSummary = (summary) => {
      totalEl.textContent = summary.total;
      todayEl.textContent = summary.today;
      listEl.textContent = summary.listing;
    };

    const refreshChart = async () => {
      const res = await fetch('/chart.svg');
      if (!res.ok) {
        throw new Error('Unable to load chart');
      }
      chartEl.innerHTML = await res.text();
    };

    document.getElementById('record-form').addEventListener('submit', (event) => {
      event.preventDefault();
      fetch('/api/events', { method: 'POST' })
        .then(async (res) => {
          if (!res.ok) {
            throw new Error((await res.text()) || 'Request failed');
          }
          showSummary((await res.json()).summary);
          await refreshChart();
          setStatus('', '');
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('avg').addEventListener('click', () => {
      fetch('/api/average?days={{AVG_DAYS}}')
        .then(async (res) => {
          if (!res.ok) {
            throw new Error((await res.text()) || 'Request failed');
          }
          avgEl.textContent = (await res.json()).display;
        })
        .catch((err) => setStatus(err.message, 'error'));
    });
  </script>
</body>
</html>
"#;
