//! Static HTML for the browser interface.
//!
//! The page is a landing header, three tabs (summarizer, translator, document
//! Q&A) and a footer. Each tab posts to the matching `/api/*` endpoint and
//! writes the returned `output` (or `error`) into its result box.

const PAGE_TITLE: &str = "Unified NLP Toolkit ✨";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #f8fafc; color: #1e293b; margin: 0; }
.landing { max-width: 900px; margin: 36px auto 0 auto; background: linear-gradient(135deg, #eef6fb 0%, #e0ecfa 100%);
  border-radius: 30px; box-shadow: 0 8px 36px #b6c4e033; padding: 60px 0 45px 0; text-align: center; }
.landing h1 { font-size: 3.2em; color: #174ea6; font-weight: 900; letter-spacing: -1.5px; margin-bottom: 10px; }
.landing p { font-size: 1.27em; color: #51627a; margin: 24px 0 27px 0; }
.links { display: flex; flex-wrap: wrap; justify-content: center; gap: 30px; margin-top: 27px; }
.links a { color: white; padding: 17px 36px; border-radius: 16px; text-decoration: none; font-size: 1.16em; font-weight: 700; }
.links a.summarizer { background: linear-gradient(100deg, #2563eb 70%, #4f92fc 100%); }
.links a.translator { background: linear-gradient(100deg, #059669 70%, #34d399 110%); }
.links a.qna { background: linear-gradient(100deg, #f59e42 70%, #fbbf24 110%); }
main { max-width: 900px; margin: 40px auto; }
.tabs button { border: none; background: #e2e8f0; padding: 10px 20px; border-radius: 10px 10px 0 0; cursor: pointer; font-size: 1em; }
.tabs button.active { background: white; font-weight: 700; }
section { display: none; background: white; padding: 24px; border-radius: 0 16px 16px 16px; }
section.active { display: block; }
label { display: block; font-weight: 600; margin: 14px 0 6px 0; }
textarea, select, input { width: 100%; box-sizing: border-box; font: inherit; padding: 8px; }
form button { margin-top: 14px; padding: 10px 24px; border-radius: 10px; border: 1px solid #cbd5e1; background: #f1f5f9; cursor: pointer; }
footer { text-align: center; margin-top: 54px; margin-bottom: 12px; color: #64748b; font-size: 1.13em; letter-spacing: 0.5px; }
"#;

const SCRIPT: &str = r#"
function showTab(id) {
  document.querySelectorAll('section').forEach(s => s.classList.toggle('active', s.id === id));
  document.querySelectorAll('.tabs button').forEach(b => b.classList.toggle('active', b.dataset.tab === id));
}
document.querySelectorAll('.tabs button').forEach(b => b.addEventListener('click', () => showTab(b.dataset.tab)));
document.querySelectorAll('.links a').forEach(a => a.addEventListener('click', () => showTab(a.getAttribute('href').slice(1))));

async function submit(event, url, body, output) {
  event.preventDefault();
  const box = document.getElementById(output);
  box.value = 'Working...';
  try {
    const response = await fetch(url, body);
    const payload = await response.json();
    box.value = payload.output ?? payload.error ?? '';
  } catch (err) {
    box.value = 'Request failed: ' + err;
  }
}
const json = data => ({ method: 'POST', headers: { 'Content-Type': 'application/json' }, body: JSON.stringify(data) });

document.getElementById('summarize-form').addEventListener('submit', e =>
  submit(e, '/api/summarize', json({ text: document.getElementById('summary-input').value }), 'summary-output'));
document.getElementById('translate-form').addEventListener('submit', e =>
  submit(e, '/api/translate', json({
    text: document.getElementById('translate-input').value,
    language: document.getElementById('translate-language').value,
  }), 'translate-output'));
document.getElementById('qna-form').addEventListener('submit', e =>
  submit(e, '/api/answer', { method: 'POST', body: new FormData(e.target) }, 'qna-output'));
"#;

/// Render the full interface. `languages` become the translator's dropdown options.
pub fn render_page(languages: &[&str]) -> String {
    let options: String = languages
        .iter()
        .map(|name| {
            let name = escape_html(name);
            format!("<option value=\"{name}\">{name}</option>")
        })
        .collect::<Vec<_>>()
        .join("\n          ");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <style>{style}</style>
</head>
<body>
  {landing}
  <main>
    <nav class="tabs">
      <button data-tab="summarizer" class="active">Text Summarizer</button>
      <button data-tab="translator">Multilanguage Translator</button>
      <button data-tab="qna">Document QnA</button>
    </nav>

    <section id="summarizer" class="active">
      <h3>Text Summarizer</h3>
      <blockquote>Enter your text below and click <b>Summarize</b> to generate a concise summary.</blockquote>
      <form id="summarize-form">
        <label for="summary-input">Input</label>
        <textarea id="summary-input" rows="10" placeholder="Paste your text here..."></textarea>
        <button type="submit" id="summarize-btn">Summarize</button>
      </form>
      <label for="summary-output">Summary</label>
      <textarea id="summary-output" rows="4" readonly></textarea>
    </section>

    <section id="translator">
      <h3>Multilanguage Translator</h3>
      <blockquote>Enter English text, select a language, and click <b>Translate</b>.</blockquote>
      <form id="translate-form">
        <label for="translate-input">English Text</label>
        <textarea id="translate-input" rows="10"></textarea>
        <label for="translate-language">Select Language</label>
        <select id="translate-language">
          {options}
        </select>
        <button type="submit" id="translate-btn">Translate</button>
      </form>
      <label for="translate-output">Translated Text</label>
      <textarea id="translate-output" rows="4" readonly></textarea>
    </section>

    <section id="qna">
      <h3>Document Q&amp;A</h3>
      <blockquote>Upload a <code>.txt</code> file and ask a question about its content.</blockquote>
      <form id="qna-form">
        <label for="qna-file">Upload Text File</label>
        <input type="file" id="qna-file" name="file" accept=".txt,text/plain">
        <label for="qna-question">Your Question</label>
        <textarea id="qna-question" name="question" rows="2"></textarea>
        <button type="submit" id="qna-btn">Get Answer</button>
      </form>
      <label for="qna-output">Answer</label>
      <textarea id="qna-output" rows="2" readonly></textarea>
    </section>
  </main>
  {footer}
  <script>{script}</script>
</body>
</html>"#,
        title = PAGE_TITLE,
        style = STYLE,
        landing = landing_page(),
        options = options,
        footer = footer(),
        script = SCRIPT,
    )
}

fn landing_page() -> String {
    format!(
        r##"<div class="landing">
    <h1>{}</h1>
    <p>Summarize, translate, or ask questions on documents using a modern, friendly interface.<br><br>
    Select a tool below to get started.</p>
    <div class="links">
      <a class="summarizer" href="#summarizer">Text Summarizer</a>
      <a class="translator" href="#translator">Translator</a>
      <a class="qna" href="#qna">Document Q&amp;A</a>
    </div>
  </div>"##,
        PAGE_TITLE
    )
}

fn footer() -> &'static str {
    r#"<footer>Made with <span style="color:#e11d48;">&#10084;&#65039;</span></footer>"#
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
