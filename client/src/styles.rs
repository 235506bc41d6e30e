/// Id of the `<style>` element, so several widgets on one page share a single copy.
pub const STYLE_ELEMENT_ID: &str = "clip-widget-styles";

/// Every selector is prefixed with `clip-` to stay clear of host page styles.
pub const STYLESHEET: &str = r#"
.clip-widget-wrap {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: white;
    border-radius: 16px;
    box-shadow: 0 4px 24px rgba(0,0,0,0.06);
    overflow: hidden;
    max-width: 100%;
}
.clip-tabs {
    display: flex;
    border-bottom: 2px solid #f1f5f9;
    background: #fafbfc;
}
.clip-tab {
    flex: 1;
    padding: 1.5rem 2rem;
    background: transparent;
    border: none;
    cursor: pointer;
    font-size: 1.1rem;
    font-weight: 600;
    color: #64748b;
    transition: all 0.3s;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.75rem;
}
.clip-tab:hover {
    background: #f8fafc;
    color: #475569;
}
.clip-tab.active {
    color: #667eea;
    background: white;
    box-shadow: inset 0 -3px 0 #667eea;
}
.clip-tab-content {
    display: none;
    padding: 2.5rem 2rem;
}
.clip-tab-content.active {
    display: block;
}
.clip-search-title {
    font-size: 1.6rem;
    color: #1e293b;
    font-weight: 700;
    margin: 0 0 0.5rem 0;
    text-align: center;
}
.clip-search-subtitle {
    color: #64748b;
    margin: 0 0 2rem 0;
    text-align: center;
}
.clip-upload-area {
    border: 3px dashed #cbd5e1;
    border-radius: 12px;
    padding: 3rem 2rem;
    text-align: center;
    cursor: pointer;
    transition: all 0.3s;
    background: #f8fafc;
}
.clip-upload-area:hover,
.clip-upload-area.drag-over {
    border-color: #667eea;
    background: #f0f4ff;
}
.clip-upload-icon {
    font-size: 3rem;
    margin-bottom: 1rem;
}
.clip-upload-text {
    font-size: 1.1rem;
    font-weight: 600;
    color: #334155;
}
.clip-upload-hint {
    color: #94a3b8;
    font-size: 0.9rem;
    margin-top: 0.25rem;
}
.clip-preview {
    text-align: center;
}
.clip-preview-container {
    position: relative;
    display: inline-block;
    margin-bottom: 1.5rem;
}
.clip-preview-container img {
    max-width: 100%;
    max-height: 300px;
    border-radius: 12px;
    box-shadow: 0 4px 12px rgba(0,0,0,0.1);
}
.clip-remove-btn {
    position: absolute;
    top: -12px;
    right: -12px;
    width: 32px;
    height: 32px;
    border-radius: 50%;
    border: none;
    background: #ef4444;
    color: white;
    font-size: 1.2rem;
    cursor: pointer;
}
.clip-search-btn {
    display: block;
    width: 100%;
    max-width: 400px;
    margin: 0 auto;
    padding: 1rem 2rem;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    border: none;
    border-radius: 10px;
    font-size: 1.05rem;
    font-weight: 600;
    cursor: pointer;
    transition: transform 0.2s, box-shadow 0.2s;
}
.clip-search-btn:hover {
    transform: translateY(-2px);
    box-shadow: 0 8px 20px rgba(102, 126, 234, 0.35);
}
.clip-search-btn:disabled {
    background: #cbd5e1;
    cursor: not-allowed;
    transform: none;
    box-shadow: none;
}
.clip-input-wrap {
    position: relative;
    max-width: 600px;
    margin: 0 auto 1.5rem;
}
.clip-input-icon {
    position: absolute;
    left: 1.1rem;
    top: 50%;
    transform: translateY(-50%);
}
.clip-input {
    width: 100%;
    box-sizing: border-box;
    padding: 1rem 1rem 1rem 3rem;
    border: 2px solid #e2e8f0;
    border-radius: 10px;
    font-size: 1.05rem;
}
.clip-input:focus {
    outline: none;
    border-color: #667eea;
}
.clip-examples,
.clip-chip-group {
    margin-top: 1.5rem;
    text-align: center;
}
.clip-examples-label,
.clip-chip-group-label {
    color: #64748b;
    font-size: 0.9rem;
    margin-bottom: 0.75rem;
}
.clip-example-tag,
.clip-chip {
    display: inline-block;
    margin: 0.25rem;
    padding: 0.45rem 1rem;
    border: 1px solid #e2e8f0;
    border-radius: 20px;
    background: #f8fafc;
    color: #475569;
    font-size: 0.9rem;
    cursor: pointer;
}
.clip-example-tag:hover,
.clip-chip:hover {
    background: #667eea;
    border-color: #667eea;
    color: white;
}
.clip-loading {
    display: none;
    text-align: center;
    padding: 2rem;
}
.clip-loading.active {
    display: block;
}
.clip-spinner {
    width: 48px;
    height: 48px;
    margin: 0 auto 1rem;
    border: 4px solid #e2e8f0;
    border-top-color: #667eea;
    border-radius: 50%;
    animation: clip-spin 1s linear infinite;
}
@keyframes clip-spin {
    to { transform: rotate(360deg); }
}
.clip-loading-text {
    color: #64748b;
}
.clip-notice,
.clip-error {
    background: #fef2f2;
    color: #991b1b;
    padding: 1rem;
    border-radius: 8px;
    margin: 1rem 2rem;
}
.clip-refinement,
.clip-category-error {
    margin: 1rem 2rem 2rem;
    padding: 1.5rem;
    border-radius: 12px;
    text-align: center;
}
.clip-refinement {
    background: #eef2ff;
    color: #3730a3;
}
.clip-category-error {
    background: #fff7ed;
    color: #9a3412;
}
.clip-category-details {
    font-size: 0.9rem;
    margin: 0.5rem 0 1rem;
}
.clip-category-tag {
    display: inline-block;
    margin: 0.25rem;
    padding: 0.35rem 0.85rem;
    border-radius: 16px;
    background: white;
    border: 1px solid #fed7aa;
    font-size: 0.85rem;
}
.clip-results {
    padding: 0 2rem 2rem;
}
.clip-results-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 1.5rem;
}
.clip-results-title {
    font-size: 1.5rem;
    color: #1e293b;
    font-weight: 700;
    margin: 0;
}
.clip-results-count {
    color: #64748b;
}
.clip-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(250px, 1fr));
    gap: 1.5rem;
}
.clip-grid.clip-list {
    grid-template-columns: 1fr;
}
.clip-product {
    background: white;
    border: 1px solid #e5e7eb;
    border-radius: 8px;
    overflow: hidden;
    transition: transform 0.3s, box-shadow 0.3s;
}
.clip-product:hover {
    transform: translateY(-4px);
    box-shadow: 0 8px 24px rgba(0,0,0,0.12);
}
.clip-list .clip-product {
    display: flex;
}
.clip-product-img-wrap {
    position: relative;
    width: 100%;
    padding-top: 133%;
    background: #f9fafb;
    overflow: hidden;
}
.clip-list .clip-product-img-wrap {
    width: 160px;
    flex-shrink: 0;
    padding-top: 0;
    min-height: 200px;
}
.clip-product-img {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    object-fit: cover;
}
.clip-similarity-badge {
    position: absolute;
    top: 12px;
    right: 12px;
    background: rgba(16, 185, 129, 0.95);
    color: white;
    padding: 0.4rem 0.8rem;
    border-radius: 20px;
    font-weight: 600;
    font-size: 0.9rem;
}
.clip-product-info {
    padding: 1.25rem;
}
.clip-product-category {
    color: #6b7280;
    font-size: 0.85rem;
    text-transform: uppercase;
    letter-spacing: 0.5px;
    margin-bottom: 0.5rem;
}
.clip-product-name {
    font-size: 1.05rem;
    font-weight: 600;
    color: #111827;
    margin-bottom: 0.75rem;
}
.clip-product-sku {
    color: #9ca3af;
    font-size: 0.8rem;
    margin-bottom: 0.5rem;
}
.clip-product-price {
    font-size: 1.3rem;
    font-weight: 700;
    color: #000;
}
.clip-product-stock {
    font-size: 0.85rem;
    color: #ef4444;
    margin-top: 0.5rem;
}
.clip-product-stock.in-stock {
    color: #10b981;
}
.clip-attributes {
    list-style: none;
    padding: 0;
    margin: 0.75rem 0 0;
    font-size: 0.85rem;
    color: #4b5563;
}
.clip-attributes li {
    padding: 0.15rem 0;
}
.clip-attribute-label {
    font-weight: 600;
    margin-right: 0.35rem;
}
.clip-product-link {
    display: inline-block;
    margin-top: 1rem;
    color: #667eea;
    font-weight: 600;
    text-decoration: none;
}
.clip-product-link:hover {
    text-decoration: underline;
}
"#;
