// Single-page UI served at `/`. Posts `{base64, mimeType, filename}` to `/api/alttext`.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>QuickCaption - Generate Alt Text</title>
    <meta name="description" content="Generate accessible alt text variants for images">
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Ubuntu, sans-serif;
            background: #f9fafb;
            color: #111827;
            min-height: 100vh;
            padding: 32px 16px;
        }

        main { max-width: 672px; margin: 0 auto; }

        header { text-align: center; margin-bottom: 32px; }
        header h1 { font-size: 2.25rem; margin-bottom: 8px; }
        header p { color: #4b5563; }

        .card {
            background: white;
            border-radius: 8px;
            box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
            padding: 24px;
            margin-bottom: 24px;
        }

        .drop-zone {
            border: 2px dashed #d1d5db;
            border-radius: 8px;
            padding: 48px 16px;
            text-align: center;
            transition: border-color 0.2s, background 0.2s;
        }

        .drop-zone.dragover { border-color: #4f46e5; background: #eef2ff; }
        .drop-zone p { margin-top: 8px; font-size: 0.875rem; color: #4b5563; }

        input[type="file"] { display: none; }

        button.primary {
            padding: 8px 16px;
            border: none;
            border-radius: 6px;
            background: #4f46e5;
            color: white;
            font-weight: 500;
            cursor: pointer;
        }

        button.primary:hover { background: #4338ca; }
        button.primary:disabled { opacity: 0.5; cursor: not-allowed; }
        button.wide { width: 100%; margin-top: 16px; }

        .preview { position: relative; display: none; }
        .preview img { display: block; max-width: 100%; margin: 0 auto; border-radius: 8px; }

        .remove {
            position: absolute;
            top: 8px;
            right: 8px;
            width: 32px;
            height: 32px;
            border: none;
            border-radius: 50%;
            background: #ef4444;
            color: white;
            font-size: 1.1rem;
            cursor: pointer;
        }

        .error {
            display: none;
            background: #fef2f2;
            border: 1px solid #fecaca;
            color: #b91c1c;
            padding: 12px 16px;
            border-radius: 6px;
            margin-bottom: 24px;
        }

        .variant-head {
            display: flex;
            justify-content: space-between;
            align-items: center;
            margin-bottom: 12px;
        }

        .variant-head h3 { font-size: 1.125rem; }

        .copy {
            border: none;
            background: none;
            color: #4f46e5;
            font-weight: 500;
            cursor: pointer;
        }

        .copy:hover { color: #3730a3; }
        .variant-text { color: #374151; line-height: 1.6; }
        #results { display: none; }
    </style>
</head>
<body>
<main>
    <header>
        <h1>QuickCaption</h1>
        <p>Generate accessible alt text for images</p>
    </header>

    <section class="card" id="uploadCard">
        <div class="drop-zone" id="dropZone">
            <input type="file" id="fileInput" accept="image/*">
            <button class="primary" id="selectButton">Select Image</button>
            <p>or drag and drop</p>
        </div>
        <div class="preview" id="preview">
            <img id="previewImage" alt="Preview">
            <button class="remove" id="removeButton" aria-label="Remove image">&times;</button>
            <button class="primary wide" id="generateButton">Generate Alt Text</button>
        </div>
    </section>

    <div class="error" id="error"></div>

    <section id="results">
        <div class="card">
            <div class="variant-head"><h3>Accessible</h3><button class="copy" data-key="accessible">Copy</button></div>
            <p class="variant-text" id="accessible"></p>
        </div>
        <div class="card">
            <div class="variant-head"><h3>Short</h3><button class="copy" data-key="short">Copy</button></div>
            <p class="variant-text" id="short"></p>
        </div>
        <div class="card">
            <div class="variant-head"><h3>SEO</h3><button class="copy" data-key="seo">Copy</button></div>
            <p class="variant-text" id="seo"></p>
        </div>
    </section>
</main>

<script>
    const dropZone = document.getElementById('dropZone');
    const fileInput = document.getElementById('fileInput');
    const preview = document.getElementById('preview');
    const previewImage = document.getElementById('previewImage');
    const generateButton = document.getElementById('generateButton');
    const errorBox = document.getElementById('error');
    const results = document.getElementById('results');

    let dataUrl = null;
    let filename = '';

    function showError(message) {
        errorBox.textContent = message;
        errorBox.style.display = message ? 'block' : 'none';
    }

    function reset() {
        dataUrl = null;
        filename = '';
        fileInput.value = '';
        preview.style.display = 'none';
        dropZone.style.display = 'block';
        results.style.display = 'none';
    }

    function handleFile(file) {
        if (!file.type.startsWith('image/')) {
            showError('Please select an image file');
            return;
        }
        showError(null);
        filename = file.name;
        results.style.display = 'none';

        const reader = new FileReader();
        reader.onloadend = () => {
            dataUrl = reader.result;
            previewImage.src = dataUrl;
            dropZone.style.display = 'none';
            preview.style.display = 'block';
        };
        reader.readAsDataURL(file);
    }

    document.getElementById('selectButton').addEventListener('click', () => fileInput.click());
    document.getElementById('removeButton').addEventListener('click', reset);

    fileInput.addEventListener('change', (e) => {
        const file = e.target.files[0];
        if (file) handleFile(file);
    });

    const uploadCard = document.getElementById('uploadCard');
    uploadCard.addEventListener('dragover', (e) => {
        e.preventDefault();
        dropZone.classList.add('dragover');
    });
    uploadCard.addEventListener('dragleave', () => dropZone.classList.remove('dragover'));
    uploadCard.addEventListener('drop', (e) => {
        e.preventDefault();
        dropZone.classList.remove('dragover');
        const file = e.dataTransfer.files[0];
        if (file) handleFile(file);
    });

    generateButton.addEventListener('click', async () => {
        if (!dataUrl) return;

        generateButton.disabled = true;
        generateButton.textContent = 'Generating...';
        showError(null);

        try {
            const [header, base64] = dataUrl.split(',');
            const match = header.match(/:(.*?);/);
            const mimeType = match ? match[1] : 'image/png';

            const response = await fetch('/api/alttext', {
                method: 'POST',
                headers: { 'Content-Type': 'application/json' },
                body: JSON.stringify({ base64, mimeType, filename }),
            });

            if (response.status === 413) {
                throw new Error('Image is too large to upload');
            }
            const text = await response.text();
            let data = null;
            try {
                data = JSON.parse(text);
            } catch (_) {
                throw new Error(text || 'Failed to generate alt text');
            }
            if (!response.ok) {
                throw new Error(data.message || data.error || 'Failed to generate alt text');
            }

            for (const key of ['accessible', 'short', 'seo']) {
                document.getElementById(key).textContent = data[key];
            }
            results.style.display = 'block';
        } catch (err) {
            showError(err.message || 'An error occurred');
        } finally {
            generateButton.disabled = false;
            generateButton.textContent = 'Generate Alt Text';
        }
    });

    document.querySelectorAll('.copy').forEach((button) => {
        button.addEventListener('click', async () => {
            const text = document.getElementById(button.dataset.key).textContent;
            try {
                await navigator.clipboard.writeText(text);
                button.textContent = 'Copied!';
                setTimeout(() => { button.textContent = 'Copy'; }, 2000);
            } catch (err) {
                console.error('Failed to copy:', err);
            }
        });
    });
</script>
</body>
</html>
"#;
