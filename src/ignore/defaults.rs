//! Built-in default exclusions
//!
//! These cover artifacts that are almost never wanted in a context file:
//! VCS metadata, lock files, build output, caches, environment files,
//! editor droppings, and binary/media formats. The list is a plain slice
//! so callers (and tests) can substitute their own.

pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    // VCS metadata
    ".git/",
    ".hg/",
    ".svn/",
    ".bzr/",
    // The ignore file itself is read, not scribed
    ".gitignore",
    // Dependency lock files
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "poetry.lock",
    "Pipfile.lock",
    "composer.lock",
    "Gemfile.lock",
    "Cargo.lock",
    "go.sum",
    // Compiled code and binaries
    "*.pyc",
    "__pycache__/",
    "*.class",
    "*.jar",
    "*.war",
    "*.ear",
    "*.o",
    "*.a",
    "*.so",
    "*.dylib",
    "*.dll",
    "*.exe",
    "*.wasm",
    "*.elc",
    // Build output directories
    "build/",
    "dist/",
    "target/",
    "bin/",
    "obj/",
    "out/",
    "public/build/",
    // Framework and tool caches
    ".next/",
    ".nuxt/",
    ".svelte-kit/",
    ".vercel/",
    ".serverless/",
    ".terraform/",
    // Environment files
    ".env",
    ".env.*",
    // Virtual environments
    ".venv/",
    "venv/",
    "env/",
    ".env/",
    // IDE and editor files
    ".idea/",
    ".vscode/",
    "*.sublime-*",
    ".project",
    ".settings/",
    ".classpath",
    "*.swp",
    "*.swo",
    // OS files
    ".DS_Store",
    "Thumbs.db",
    // Logs
    "*.log",
    // Test and coverage output
    "coverage/",
    ".coverage",
    "htmlcov/",
    "*.lcov",
    "nosetests.xml",
    "pytest.xml",
    ".pytest_cache/",
    // Media and other binary assets
    "*.png",
    "*.jpg",
    "*.jpeg",
    "*.gif",
    "*.bmp",
    "*.tiff",
    "*.webp",
    "*.ico",
    "*.svg",
    "*.mp3",
    "*.wav",
    "*.ogg",
    "*.flac",
    "*.mp4",
    "*.avi",
    "*.mov",
    "*.wmv",
    "*.mkv",
    "*.webm",
    "*.pdf",
    "*.doc",
    "*.docx",
    "*.ppt",
    "*.pptx",
    "*.xls",
    "*.xlsx",
    "*.odt",
    "*.odp",
    "*.ods",
    "*.zip",
    "*.tar",
    "*.gz",
    "*.rar",
    "*.7z",
    "*.tgz",
    "*.bz2",
    "*.iso",
    "*.dmg",
    // Fonts
    "*.ttf",
    "*.otf",
    "*.woff",
    "*.woff2",
    // Dependency directories
    "node_modules/",
    "vendor/",
    "bower_components/",
    // Deployment artifacts
    "cdk.out/",
];
