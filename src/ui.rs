use maud::html;

pub fn render_index(title: &str, items: &[String]) -> String {
    let options = html! {
        @for (index, item) in items.iter().enumerate() {
            option value=(item) selected[index == 0] { (item) }
        }
    };

    INDEX_HTML
        .replace("{{TITLE}}", &html! { (title) }.into_string())
        .replace("{{OPTIONS}}", &options.into_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <script src="https://cdn.jsdelivr.net/npm/vega@5"></script>
  <script src="https://cdn.jsdelivr.net/npm/vega-lite@5"></script>
  <script src="https://cdn.jsdelivr.net/npm/vega-embed@6"></script>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    hr {
      width: 100%;
      border: none;
      border-top: 1px solid rgba(47, 72, 88, 0.16);
      margin: 0;
    }

    .picker {
      display: grid;
      gap: 8px;
    }

    .picker label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    select {
      font: inherit;
      padding: 12px 14px;
      border-radius: 14px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      background: white;
      color: var(--accent-2);
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      min-height: 540px;
    }

    #chart {
      width: 100%;
    }

    .empty {
      display: grid;
      place-items: center;
      min-height: 500px;
      color: #7a746d;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>{{TITLE}}</h1>
    <hr />

    <section class="picker">
      <label for="menu-item">Select a menu item</label>
      <select id="menu-item">
          {{OPTIONS}}
      </select>
    </section>

    <section class="chart-card">
      <div id="chart"></div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const selectEl = document.getElementById('menu-item');
    const chartEl = document.getElementById('chart');
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const showEmpty = (item) => {
      chartEl.innerHTML = '';
      const note = document.createElement('div');
      note.className = 'empty';
      note.textContent = `Nothing to display for ${item}`;
      chartEl.appendChild(note);
    };

    const onSelectionChanged = async () => {
      const item = selectEl.value;
      const res = await fetch(`/api/chart?item=${encodeURIComponent(item)}`);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Unable to load chart');
      }

      const view = await res.json();
      if (view.empty) {
        showEmpty(view.item);
      } else {
        await vegaEmbed('#chart', view.chart, { actions: false });
      }
      setStatus('', '');
    };

    selectEl.addEventListener('change', () => {
      onSelectionChanged().catch((err) => setStatus(err.message, 'error'));
    });

    onSelectionChanged().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
