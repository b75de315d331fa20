//! Embedded dashboard assets. One static page over the JSON API; the queue
//! table removes itself once every inspection reaches terminal success.

pub const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Font Inspector</title>
  <link rel="stylesheet" href="/assets/index.css">
</head>
<body>
  <header>
    <h1>Font Inspector</h1>
    <button id="rebuild">Rebuild links</button>
  </header>
  <main>
    <section id="create">
      <h2>New project</h2>
      <form id="create-form">
        <input id="project-name" type="text" placeholder="Project name" required>
        <textarea id="project-urls" rows="3" placeholder="One URL per line"></textarea>
        <button type="submit">Create</button>
      </form>
    </section>
    <section id="projects-section">
      <h2>Projects</h2>
      <ul id="projects"></ul>
    </section>
    <section id="queue-section" hidden>
      <h2>Queue</h2>
      <table id="queue">
        <thead>
          <tr><th>URL</th><th>Status</th><th>Progress</th><th>Error</th><th></th></tr>
        </thead>
        <tbody></tbody>
      </table>
    </section>
  </main>
  <script src="/assets/index.js"></script>
</body>
</html>
"#;

pub const INDEX_CSS: &str = r"
:root { color-scheme: light dark; font-family: system-ui, sans-serif; }
body { margin: 0 auto; max-width: 60rem; padding: 1rem; }
header { display: flex; align-items: baseline; justify-content: space-between; }
h1 { font-size: 1.4rem; }
section { margin-bottom: 1.5rem; }
form { display: grid; gap: 0.5rem; max-width: 30rem; }
table { border-collapse: collapse; width: 100%; }
th, td { border-bottom: 1px solid #8884; padding: 0.35rem 0.5rem; text-align: left; }
td.status-failed { color: #c0392b; }
td.status-completed { color: #27ae60; }
button { cursor: pointer; }
";

pub const INDEX_JS: &str = r#"
async function getJson(path) {
  const response = await fetch(path);
  if (!response.ok) throw new Error(`${path}: ${response.status}`);
  return response.json();
}

async function postJson(path, body) {
  const response = await fetch(path, {
    method: 'POST',
    headers: { 'content-type': 'application/json' },
    body: JSON.stringify(body),
  });
  if (!response.ok) throw new Error(`${path}: ${response.status}`);
  return response.json();
}

async function refreshProjects() {
  const projects = await getJson('/api/projects');
  const list = document.getElementById('projects');
  list.replaceChildren();
  for (const project of projects) {
    const item = document.createElement('li');
    item.textContent = `${project.name} (${project.inspection_ids.length} inspections)`;
    list.appendChild(item);
  }
}

async function refreshQueue() {
  const snapshot = await getJson('/api/queue');
  const section = document.getElementById('queue-section');
  section.hidden = !snapshot.visible;
  if (!snapshot.visible) return;

  const body = document.querySelector('#queue tbody');
  body.replaceChildren();
  for (const entry of snapshot.entries) {
    const row = document.createElement('tr');
    const cells = [entry.url, entry.status, `${entry.progress}%`, entry.error_message ?? ''];
    for (const [index, value] of cells.entries()) {
      const cell = document.createElement('td');
      cell.textContent = value;
      if (index === 1) cell.className = `status-${entry.status}`;
      row.appendChild(cell);
    }
    const actions = document.createElement('td');
    if (entry.status === 'pending' || entry.status === 'failed') {
      const run = document.createElement('button');
      run.textContent = 'Run';
      run.addEventListener('click', async () => {
        run.disabled = true;
        try { await postJson('/api/inspection/run', { id: entry.id }); } catch {}
        await refreshAll();
      });
      actions.appendChild(run);
    }
    row.appendChild(actions);
    body.appendChild(row);
  }
}

async function refreshAll() {
  try {
    await refreshProjects();
    await refreshQueue();
  } catch {}
}

document.getElementById('create-form').addEventListener('submit', async (event) => {
  event.preventDefault();
  const name = document.getElementById('project-name').value;
  const urls = document.getElementById('project-urls').value
    .split('\n').map((line) => line.trim()).filter(Boolean);
  try {
    await postJson('/api/project/create', { name, urls });
    document.getElementById('create-form').reset();
  } catch {}
  await refreshAll();
});

document.getElementById('rebuild').addEventListener('click', async () => {
  try { await postJson('/api/rebuild', {}); } catch {}
  await refreshAll();
});

refreshAll();
setInterval(refreshAll, 2000);
"#;
