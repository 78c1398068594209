pub const APP_STYLES: &str = r#"
:root {
    --accent: #4a7c59;
    --accent-strong: #3a6347;
    --accent-soft: #e7f0ea;
    --surface: #ffffff;
    --surface-muted: #f8faf9;
    --border-color: #dde4df;
    --text-primary: #1f2937;
    --text-secondary: #6b7280;
    --danger-bg: #fef2f2;
    --danger-border: #fecaca;
    --danger-text: #b91c1c;
    --warn-text: #b45309;
    --ok-text: #15803d;
}

* { box-sizing: border-box; }

body {
    margin: 0;
    background: var(--surface-muted);
    color: var(--text-primary);
    font-family: -apple-system, 'Segoe UI', Roboto, 'Helvetica Neue', sans-serif;
    line-height: 1.5;
}

.app-shell {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}

.app-main {
    flex: 1;
}

/* Navbar */
.navbar {
    background: linear-gradient(to right, var(--accent-soft), #dce9e0);
    border-bottom: 1px solid var(--border-color);
}

.navbar-inner {
    max-width: 72rem;
    margin: 0 auto;
    padding: 0 1rem;
    height: 4rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.navbar-brand {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    text-decoration: none;
}

.navbar-logo { width: 2.5rem; height: 2.5rem; }

.navbar-title {
    display: flex;
    flex-direction: column;
}

.navbar-name {
    font-weight: 600;
    font-size: 1.25rem;
    color: var(--accent-strong);
}

.navbar-tagline {
    font-size: 0.75rem;
    color: var(--accent);
}

.navbar-links { display: flex; align-items: center; gap: 0.5rem; }

.navbar-link {
    padding: 0.5rem 0.75rem;
    border-radius: 0.375rem;
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--accent-strong);
    text-decoration: none;
}

.navbar-link.active { background: #c9dccf; }

.navbar-status {
    font-size: 0.7rem;
    color: var(--text-secondary);
    display: flex;
    align-items: center;
    gap: 0.3rem;
}

.status-dot { font-size: 0.6rem; }
.status-dot.ok { color: var(--ok-text); }
.status-dot.down { color: var(--danger-text); }

.navbar-menu-button {
    display: none;
    background: none;
    border: none;
    font-size: 1.25rem;
    color: var(--accent-strong);
    cursor: pointer;
}

.navbar-mobile {
    border-top: 1px solid var(--border-color);
    padding: 0.5rem 1rem;
    display: flex;
    flex-direction: column;
}

@media (max-width: 640px) {
    .navbar-links { display: none; }
    .navbar-menu-button { display: block; }
}

/* Layout */
.page {
    max-width: 64rem;
    margin: 0 auto;
    padding: 2rem 1rem;
}

.review-grid {
    display: grid;
    grid-template-columns: 3fr 2fr;
    gap: 1.5rem;
}

@media (max-width: 768px) {
    .review-grid { grid-template-columns: 1fr; }
}

.card {
    background: var(--surface);
    border: 1px solid var(--border-color);
    border-radius: 0.75rem;
    padding: 1.5rem;
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.field-label {
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--text-primary);
}

/* Upload */
.upload-zone {
    position: relative;
    border: 2px dashed var(--border-color);
    border-radius: 0.5rem;
    padding: 2rem;
    text-align: center;
    cursor: pointer;
}

.upload-zone.drag-over {
    border-color: var(--accent);
    background: var(--accent-soft);
}

.upload-zone input[type="file"] {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    opacity: 0;
    cursor: pointer;
}

.upload-icon { font-size: 2rem; }

.upload-hint { margin: 0.75rem 0 0; font-size: 0.875rem; color: var(--text-secondary); }
.upload-hint strong { color: var(--accent); }
.upload-formats { margin: 0.25rem 0 0; font-size: 0.75rem; color: var(--text-secondary); }

.upload-selected {
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
    padding: 1rem;
    background: var(--surface-muted);
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.upload-file-name { margin: 0; font-size: 0.875rem; font-weight: 500; }
.upload-file-size { margin: 0; font-size: 0.75rem; color: var(--text-secondary); }

.upload-remove {
    background: none;
    border: none;
    color: var(--text-secondary);
    font-size: 1rem;
    cursor: pointer;
}

/* Options */
.options { display: flex; flex-direction: column; gap: 0.75rem; }

.option-row {
    display: flex;
    align-items: flex-start;
    gap: 0.75rem;
    padding: 0.5rem;
    border-radius: 0.5rem;
    cursor: pointer;
}

.option-row:hover { background: var(--surface-muted); }

.option-label { font-size: 0.875rem; font-weight: 500; }
.option-description { margin: 0.1rem 0 0; font-size: 0.75rem; color: var(--text-secondary); }

.options-advanced-toggle {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    background: none;
    border: none;
    border-top: 1px solid var(--border-color);
    padding: 0.75rem 0 0;
    width: 100%;
    font-size: 0.875rem;
    color: var(--text-secondary);
    cursor: pointer;
}

.options-advanced { padding-left: 0.5rem; }

.options-count { font-size: 0.75rem; color: var(--text-secondary); }

/* Progress */
.progress {
    display: flex;
    flex-direction: column;
    align-items: center;
    padding: 2rem 0;
}

.progress-mascot {
    font-size: 3rem;
    animation: pulse 1.6s ease-in-out infinite;
}

.progress-track {
    width: 100%;
    max-width: 20rem;
    height: 0.5rem;
    margin-top: 1rem;
    background: var(--border-color);
    border-radius: 9999px;
    overflow: hidden;
}

.progress-fill {
    height: 100%;
    background: var(--accent);
    transition: width 0.5s ease-out;
}

.progress-percent { margin: 0.25rem 0 0; font-size: 0.75rem; color: var(--text-secondary); }
.progress-message { margin: 0.75rem 0 0; font-size: 0.875rem; color: var(--text-secondary); }

@keyframes pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.5; }
}

/* Buttons */
.submit-button {
    width: 100%;
    padding: 0.75rem 1rem;
    border: none;
    border-radius: 0.5rem;
    font-weight: 500;
    font-size: 1rem;
    background: var(--accent);
    color: white;
    cursor: pointer;
}

.submit-button:hover { background: var(--accent-strong); }

.submit-button:disabled {
    background: var(--border-color);
    color: var(--text-secondary);
    cursor: not-allowed;
}

.action-button {
    display: inline-flex;
    align-items: center;
    gap: 0.4rem;
    padding: 0.5rem 1rem;
    border-radius: 0.5rem;
    font-size: 0.875rem;
    font-weight: 500;
    border: 1px solid var(--border-color);
    background: var(--surface);
    color: var(--text-primary);
    cursor: pointer;
}

.action-button.primary {
    background: var(--accent);
    border-color: var(--accent);
    color: white;
}

.link-button {
    background: none;
    border: none;
    font-size: 0.875rem;
    color: var(--text-secondary);
    cursor: pointer;
}

.link-button:hover { color: var(--text-primary); }

/* Errors */
.error-banner {
    padding: 1rem;
    background: var(--danger-bg);
    border: 1px solid var(--danger-border);
    border-radius: 0.5rem;
}

.error-banner p { margin: 0; font-size: 0.875rem; color: var(--danger-text); }

/* Results */
.results { display: flex; flex-direction: column; gap: 1.5rem; }

.results-header {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
}

.results-title h2 { margin: 0; font-size: 1.125rem; }
.results-title p { margin: 0.25rem 0 0; font-size: 0.875rem; color: var(--text-secondary); }

.results-stats { display: flex; gap: 1.5rem; }

.stat { text-align: center; }
.stat-value { margin: 0; font-size: 1.5rem; font-weight: 700; }
.stat-value.issues { color: var(--warn-text); }
.stat-value.clean { color: var(--ok-text); }
.stat-label { margin: 0; font-size: 0.875rem; color: var(--text-secondary); }

.results-actions { display: flex; flex-wrap: wrap; gap: 0.75rem; }

.results-view-toggle { display: flex; justify-content: flex-end; }

.report-rendered { overflow-x: auto; }
.report-rendered h1, .report-rendered h2 { color: var(--accent-strong); }
.report-rendered table { border-collapse: collapse; }
.report-rendered td, .report-rendered th {
    border: 1px solid var(--border-color);
    padding: 0.25rem 0.5rem;
}

.report-raw {
    margin: 0;
    font-family: 'Menlo', 'Consolas', monospace;
    font-size: 0.8125rem;
    white-space: pre-wrap;
}

/* Sectioned report */
.report-sections { display: flex; flex-direction: column; gap: 0.75rem; }

.report-section {
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
    background: var(--surface);
}

.report-section-summary {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 0.75rem;
    padding: 0.75rem 1rem;
    cursor: pointer;
    list-style: none;
    font-weight: 500;
}

.report-section-body { padding: 0 1rem 1rem; }

.issue-badge {
    font-size: 0.75rem;
    font-weight: 600;
    padding: 0.15rem 0.6rem;
    border-radius: 9999px;
}

.issue-badge.flagged { background: #fef3c7; color: var(--warn-text); }
.issue-badge.clean { background: #dcfce7; color: var(--ok-text); }

/* History */
.history { margin-top: 2rem; }

.history-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.history-header h3 { margin: 0; font-size: 0.95rem; }

.history ul { list-style: none; margin: 0.5rem 0 0; padding: 0; }

.history-row {
    display: flex;
    justify-content: space-between;
    padding: 0.5rem 0;
    border-bottom: 1px solid var(--border-color);
    font-size: 0.875rem;
}

.history-meta { color: var(--text-secondary); }

.privacy-note {
    margin-top: 1.5rem;
    text-align: center;
    font-size: 0.75rem;
    color: var(--text-secondary);
}

/* Admin */
.admin-login {
    min-height: 70vh;
    display: flex;
    align-items: center;
    justify-content: center;
}

.admin-login .card { width: 100%; max-width: 24rem; }
.admin-login h1 { margin: 0; text-align: center; font-size: 1.25rem; }

.admin-field label { display: block; font-size: 0.875rem; margin-bottom: 0.25rem; }

.admin-field input {
    width: 100%;
    padding: 0.5rem 0.75rem;
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
    font-size: 0.9rem;
}

.admin-error { margin: 0; font-size: 0.875rem; color: var(--danger-text); }

.admin-page { max-width: 42rem; margin: 0 auto; padding: 2rem 1rem; }

.admin-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 1.5rem;
}

.admin-header h1 { margin: 0; font-size: 1.5rem; }

.tone-intro { margin: 0 0 1rem; font-size: 0.875rem; color: var(--text-secondary); }

.tone-list { display: flex; flex-direction: column; gap: 0.5rem; }

.tone-row {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.75rem;
    border: 1px solid var(--border-color);
    border-radius: 0.5rem;
    cursor: pointer;
}

.tone-row.selected { border-color: var(--accent); background: var(--accent-soft); }

.tone-name { font-weight: 500; text-transform: capitalize; }
.tone-current { margin-left: 0.5rem; font-size: 0.75rem; color: var(--accent); }
.tone-description { margin: 0.1rem 0 0; font-size: 0.75rem; color: var(--text-secondary); }

.admin-save-row {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    padding-top: 1rem;
    border-top: 1px solid var(--border-color);
}

.save-message { margin: 0; font-size: 0.875rem; }
.save-message.ok { color: var(--ok-text); }
.save-message.err { color: var(--danger-text); }

.usage-table { width: 100%; border-collapse: collapse; font-size: 0.875rem; }
.usage-table th {
    text-align: left;
    color: var(--text-secondary);
    font-weight: 500;
    padding: 0.4rem 0.5rem;
    border-bottom: 1px solid var(--border-color);
}
.usage-table td { padding: 0.4rem 0.5rem; border-bottom: 1px solid var(--border-color); }

.usage-totals { display: flex; gap: 2rem; margin-bottom: 1rem; }
"#;
