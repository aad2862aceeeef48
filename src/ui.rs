use crate::models::Counter;
use crate::scoreboard::ScoreBoard;
use crate::state::PageMeta;

pub fn render_index(page: &PageMeta, board: &ScoreBoard) -> Result<String, serde_json::Error> {
    let snapshot = script_safe_json(board)?;
    let concentration = board.score(Counter::Concentration).to_string();
    let difficulty = board.score(Counter::Difficulty).to_string();

    Ok(fill(
        INDEX_HTML,
        &[
            ("TITLE", escape_html(&page.title)),
            ("DESCRIPTION", escape_html(&page.description)),
            ("CONCENTRATION", concentration),
            ("DIFFICULTY", difficulty),
            ("CONCENTRATION_INPUT", escape_html(board.input(Counter::Concentration))),
            ("DIFFICULTY_INPUT", escape_html(board.input(Counter::Difficulty))),
            ("STATE", snapshot),
        ],
    ))
}

// Single pass: substituted values are never rescanned for markers.
fn fill(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let replaced = after.find("}}").and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (value, end))
        });

        match replaced {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

// `<` only appears inside JSON strings, where `\u003c` decodes to the same character.
fn script_safe_json(board: &ScoreBoard) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(board)?.replace('<', "\\u003c"))
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="ko">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <meta name="description" content="{{DESCRIPTION}}" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --bg: #faf7ff;
      --ink: #1f1d2b;
      --muted: #6b6780;
      --purple: #9333ea;
      --pink: #db2777;
      --concentration: #8884d8;
      --difficulty: #82ca9d;
      --card: #ffffff;
      --border: rgba(31, 29, 43, 0.1);
      --shadow: 0 16px 40px rgba(31, 29, 43, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Pretendard", "Apple SD Gothic Neo", "Noto Sans KR", sans-serif;
    }

    .app {
      display: flex;
      flex-direction: column;
      align-items: center;
      gap: 24px;
      padding: 24px;
    }

    header {
      text-align: center;
    }

    h1 {
      margin: 0;
      font-size: 1.9rem;
      font-weight: 700;
      background: linear-gradient(90deg, var(--purple), var(--pink));
      -webkit-background-clip: text;
      background-clip: text;
      color: transparent;
    }

    .subtitle {
      margin: 8px 0 0;
      color: var(--muted);
    }

    .scores {
      display: flex;
      flex-wrap: wrap;
      justify-content: center;
      gap: 16px;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 14px;
      box-shadow: var(--shadow);
      padding: 20px;
    }

    .score-card {
      width: 16rem;
      display: flex;
      flex-direction: column;
      align-items: center;
      gap: 16px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.25rem;
      font-weight: 600;
    }

    .score-value {
      font-size: 2.25rem;
      font-weight: 700;
    }

    .score-card form {
      width: 100%;
      margin: 0;
    }

    input[type="number"] {
      width: 100%;
      padding: 10px 12px;
      border: 1px solid var(--border);
      border-radius: 8px;
      font-size: 1rem;
      text-align: center;
    }

    .buttons {
      display: flex;
      gap: 8px;
      width: 100%;
    }

    .buttons form {
      width: 50%;
    }

    button {
      width: 100%;
      border-radius: 8px;
      padding: 10px 14px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-outline {
      background: white;
      color: var(--ink);
      border: 1px solid var(--border);
    }

    .btn-solid {
      background: var(--ink);
      color: white;
      border: 1px solid var(--ink);
    }

    .chart-card {
      width: 100%;
      max-width: 48rem;
      display: grid;
      gap: 12px;
    }

    #chart {
      width: 100%;
      height: 16rem;
      display: block;
    }

    .chart-grid {
      stroke: rgba(31, 29, 43, 0.15);
      stroke-dasharray: 3 3;
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .chart-line {
      fill: none;
      stroke-width: 2;
    }

    .chart-point {
      fill: white;
      stroke-width: 2;
    }

    .series-concentration {
      stroke: var(--concentration);
    }

    .series-difficulty {
      stroke: var(--difficulty);
    }

    .legend {
      display: flex;
      justify-content: center;
      gap: 18px;
      font-size: 0.9rem;
    }

    .legend span::before {
      content: "";
      display: inline-block;
      width: 14px;
      height: 3px;
      margin-right: 6px;
      vertical-align: middle;
      background: currentColor;
    }

    .legend .concentration {
      color: var(--concentration);
    }

    .legend .difficulty {
      color: var(--difficulty);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>{{TITLE}}</h1>
      <p class="subtitle">{{DESCRIPTION}}</p>
    </header>

    <section class="scores">
      <div class="card score-card" data-counter="concentration">
        <h2>집중력</h2>
        <div class="score-value" id="concentration-value">{{CONCENTRATION}}</div>
        <form class="input-form" method="post" action="/scores/concentration/set">
          <input type="number" min="0" name="value" value="{{CONCENTRATION_INPUT}}" placeholder="점수 입력" />
        </form>
        <div class="buttons">
          <form method="post" action="/scores/concentration/decrement" data-action="decrement">
            <button class="btn-outline" type="submit">감소</button>
          </form>
          <form method="post" action="/scores/concentration/increment" data-action="increment">
            <button class="btn-solid" type="submit">증가</button>
          </form>
        </div>
      </div>

      <div class="card score-card" data-counter="difficulty">
        <h2>난이도</h2>
        <div class="score-value" id="difficulty-value">{{DIFFICULTY}}</div>
        <form class="input-form" method="post" action="/scores/difficulty/set">
          <input type="number" min="0" name="value" value="{{DIFFICULTY_INPUT}}" placeholder="점수 입력" />
        </form>
        <div class="buttons">
          <form method="post" action="/scores/difficulty/decrement" data-action="decrement">
            <button class="btn-outline" type="submit">감소</button>
          </form>
          <form method="post" action="/scores/difficulty/increment" data-action="increment">
            <button class="btn-solid" type="submit">증가</button>
          </form>
        </div>
      </div>
    </section>

    <section class="card chart-card">
      <h2>일별 성장 그래프</h2>
      <svg id="chart" viewBox="0 0 720 256" aria-label="일별 성장 그래프" role="img"></svg>
      <div class="legend">
        <span class="concentration">집중력</span>
        <span class="difficulty">난이도</span>
      </div>
    </section>
  </main>

  <script id="initial-state" type="application/json">{{STATE}}</script>
  <script>
    const SERIES = [
      { key: 'concentration', name: '집중력' },
      { key: 'difficulty', name: '난이도' }
    ];
    const chartEl = document.getElementById('chart');
    const cards = Array.from(document.querySelectorAll('.score-card'));

    let board = JSON.parse(document.getElementById('initial-state').textContent);

    const escapeText = (value) =>
      String(value).replace(/[&<>"']/g, (ch) => `&#${ch.charCodeAt(0)};`);

    const renderChart = (history) => {
      const width = 720;
      const height = 256;
      const paddingLeft = 44;
      const paddingRight = 20;
      const paddingBottom = 30;
      const top = 16;

      let max = 0;
      history.forEach((sample) => {
        SERIES.forEach(({ key }) => {
          max = Math.max(max, sample[key]);
        });
      });
      const ticks = 4;
      max = Math.max(ticks, Math.ceil(max / ticks) * ticks);

      const plotWidth = width - paddingLeft - paddingRight;
      const xStep = history.length > 1 ? plotWidth / (history.length - 1) : 0;
      const x = (index) => (history.length > 1 ? paddingLeft + index * xStep : paddingLeft + plotWidth / 2);
      const y = (value) => height - paddingBottom - (value / max) * (height - top - paddingBottom);

      let grid = '';
      for (let i = 0; i <= ticks; i += 1) {
        const value = (max * i) / ticks;
        const yPos = y(value).toFixed(2);
        grid += `<line class="chart-grid" x1="${paddingLeft}" y1="${yPos}" x2="${width - paddingRight}" y2="${yPos}" />`;
        grid += `<text class="chart-label" x="${paddingLeft - 8}" y="${Number(yPos) + 4}" text-anchor="end">${value}</text>`;
      }

      const labelEvery = Math.max(1, Math.ceil(history.length / 12));
      const xLabels = history
        .map((sample, index) => {
          if (index % labelEvery !== 0) {
            return '';
          }
          return `<text class="chart-label" x="${x(index).toFixed(2)}" y="${height - paddingBottom + 18}" text-anchor="middle">${escapeText(sample.date)}</text>`;
        })
        .join('');

      const lines = SERIES.map(({ key, name }) => {
        const path = history
          .map((sample, index) => `${index === 0 ? 'M' : 'L'} ${x(index).toFixed(2)} ${y(sample[key]).toFixed(2)}`)
          .join(' ');
        const points = history
          .map(
            (sample, index) =>
              `<circle class="chart-point series-${key}" cx="${x(index).toFixed(2)}" cy="${y(sample[key]).toFixed(2)}" r="3"><title>${escapeText(sample.date)} ${name}: ${sample[key]}</title></circle>`
          )
          .join('');
        return `<path class="chart-line series-${key}" d="${path}" />${points}`;
      }).join('');

      chartEl.innerHTML = `${grid}${lines}${xLabels}`;
    };

    const render = (syncInputs = true) => {
      cards.forEach((card) => {
        const key = card.dataset.counter;
        document.getElementById(`${key}-value`).textContent = board[key];
        const input = card.querySelector('input[name="value"]');
        if (syncInputs && input.value !== board.inputs[key]) {
          input.value = board.inputs[key];
        }
      });
      renderChart(board.history);
    };

    let queue = Promise.resolve();

    const send = (method, url, body, syncInputs = true) => {
      const request = queue.then(async () => {
        const options = { method, headers: {} };
        if (body !== undefined) {
          options.headers['content-type'] = 'application/json';
          options.body = JSON.stringify(body);
        }
        const res = await fetch(url, options);
        if (!res.ok) {
          const msg = await res.text();
          throw new Error(msg || 'Request failed');
        }
        board = await res.json();
        render(syncInputs);
      });
      queue = request.catch(() => {});
      return request;
    };

    const report = (err) => console.error(err);

    cards.forEach((card) => {
      const key = card.dataset.counter;
      const input = card.querySelector('input[name="value"]');

      card.querySelectorAll('form[data-action]').forEach((form) => {
        form.addEventListener('submit', (event) => {
          event.preventDefault();
          send('POST', `/api/scores/${key}/${form.dataset.action}`).catch(report);
        });
      });

      input.addEventListener('input', () => {
        send('PUT', `/api/scores/${key}/input`, { text: input.value }, false).catch(report);
      });

      card.querySelector('.input-form').addEventListener('submit', (event) => {
        event.preventDefault();
        send('POST', `/api/scores/${key}/submit`, { value: input.value }).catch(report);
      });
    });

    render();
  </script>
</body>
</html>
"#;
