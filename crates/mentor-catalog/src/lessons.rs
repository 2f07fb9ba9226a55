//! Embedded lesson definition.
//!
//! Pre-authored content, fixed at build time. Explanations may carry simple
//! Telegram-HTML markup (<b>, <i>); code blocks are plain text and get
//! wrapped in <pre> by the rendering layer.

use mentor_models::Topic;

use crate::catalog::TopicEntry;
use crate::page::{BlockRole, ContentBlock, Page};

pub(crate) fn build() -> Vec<TopicEntry> {
    vec![
        TopicEntry {
            topic: Topic::Basics,
            title: "📚 Python Basics",
            pages: vec![
                Page::new(
                    "Introduction to Python",
                    "Python is a high-level, interpreted programming language used for \
                     web development, data analysis, machine learning and automation.\n\n\
                     <b>Highlights:</b>\n\
                     • Clean, readable syntax\n\
                     • Dynamic typing\n\
                     • A large standard library\n\
                     • Runs on Windows, Linux and macOS\n\n\
                     <b>First run:</b>",
                    vec![
                        ContentBlock::new(
                            BlockRole::WindowsShell,
                            "# Windows:\n\
                             1. Download Python from python.org\n\
                             2. Install with \"Add Python to PATH\" checked\n\
                             3. Open a command prompt (cmd)\n\
                             4. python --version\n\
                             5. Start the interpreter: python",
                        ),
                        ContentBlock::new(
                            BlockRole::LinuxShell,
                            "# Linux:\n\
                             1. Python is usually preinstalled\n\
                             2. Check the version: python3 --version\n\
                             3. If missing: sudo apt install python3\n\
                             4. Start the interpreter: python3",
                        ),
                        ContentBlock::new(
                            BlockRole::Example,
                            "# Your first Python program\n\
                             print(\"Hello, world!\")\n\n\
                             # Variables\n\
                             name = \"Alice\"\n\
                             age = 25\n\
                             print(f\"My name is {name}, I am {age}\")\n\n\
                             # Data types\n\
                             number = 42                 # integer\n\
                             pi = 3.14159                # float\n\
                             text = \"Python\"             # string\n\
                             is_true = True              # boolean\n\
                             numbers = [1, 2, 3, 4, 5]   # list\n\n\
                             # Reading input\n\
                             user_input = input(\"Your name: \")\n\
                             print(f\"Hi, {user_input}!\")",
                        ),
                    ],
                ),
                Page::new(
                    "Control flow",
                    "Conditionals and loops are the backbone of every program.",
                    vec![ContentBlock::new(
                        BlockRole::Example,
                        "# if / elif / else\n\
                         age = 18\n\
                         if age < 13:\n\
                         \u{20}   print(\"child\")\n\
                         elif age < 18:\n\
                         \u{20}   print(\"teenager\")\n\
                         else:\n\
                         \u{20}   print(\"adult\")\n\n\
                         # for loop\n\
                         for i in range(5):\n\
                         \u{20}   print(f\"iteration {i}\")\n\n\
                         # while loop\n\
                         count = 0\n\
                         while count < 3:\n\
                         \u{20}   count += 1\n\n\
                         # Functions\n\
                         def greet(name=\"guest\"):\n\
                         \u{20}   return f\"Hello, {name}!\"\n\n\
                         print(greet(\"Maria\"))",
                    )],
                ),
            ],
        },
        TopicEntry {
            topic: Topic::Syntax,
            title: "🧠 Modern Syntax",
            pages: vec![Page::new(
                "Modern syntax features",
                "Python keeps growing new syntax. These are the features worth \
                 reaching for first.",
                vec![ContentBlock::new(
                    BlockRole::Example,
                    "# f-strings (3.6+)\n\
                     name, height = \"Anna\", 1.75\n\
                     print(f\"{name}, height {height:.2f} m\")\n\n\
                     # Walrus operator (3.8+)\n\
                     if (n := len([1, 2, 3])) > 2:\n\
                     \u{20}   print(f\"list length: {n}\")\n\n\
                     # match statement (3.10+)\n\
                     def status_text(code: int) -> str:\n\
                     \u{20}   match code:\n\
                     \u{20}       case 200: return \"ok\"\n\
                     \u{20}       case 404: return \"not found\"\n\
                     \u{20}       case _:   return \"unknown\"\n\n\
                     # Type annotations\n\
                     def add(a: int, b: int) -> int:\n\
                     \u{20}   return a + b\n\n\
                     # Comprehensions\n\
                     squares = [x**2 for x in range(10) if x % 2 == 0]",
                )],
            )],
        },
        TopicEntry {
            topic: Topic::Oop,
            title: "🏛️ Object-Oriented Programming",
            pages: vec![Page::new(
                "OOP fundamentals",
                "OOP organises code into objects that bundle data with the methods \
                 that operate on it.\n\n\
                 <b>The four pillars:</b>\n\
                 1. <b>Encapsulation</b> — hide implementation details\n\
                 2. <b>Inheritance</b> — build new classes on existing ones\n\
                 3. <b>Polymorphism</b> — one interface, many implementations\n\
                 4. <b>Abstraction</b> — work with concepts, not details",
                vec![ContentBlock::new(
                    BlockRole::Example,
                    "class Person:\n\
                     \u{20}   def __init__(self, name: str, age: int):\n\
                     \u{20}       self.name = name\n\
                     \u{20}       self._age = age\n\n\
                     \u{20}   def introduce(self) -> str:\n\
                     \u{20}       return f\"I am {self.name}, {self._age}\"\n\n\
                     \u{20}   @property\n\
                     \u{20}   def age(self) -> int:\n\
                     \u{20}       return self._age\n\n\
                     \u{20}   @age.setter\n\
                     \u{20}   def age(self, value: int):\n\
                     \u{20}       if not 0 <= value <= 150:\n\
                     \u{20}           raise ValueError(\"bad age\")\n\
                     \u{20}       self._age = value\n\n\
                     # Inheritance\n\
                     class Student(Person):\n\
                     \u{20}   def __init__(self, name, age, student_id):\n\
                     \u{20}       super().__init__(name, age)\n\
                     \u{20}       self.student_id = student_id\n\n\
                     # Polymorphism: any object with work() fits\n\
                     class Teacher(Person):\n\
                     \u{20}   def work(self): return \"teaches\"\n\
                     class Engineer(Person):\n\
                     \u{20}   def work(self): return \"builds\"",
                )],
            )],
        },
        TopicEntry {
            topic: Topic::Files,
            title: "📁 Working with Files",
            pages: vec![Page::new(
                "Reading and writing files",
                "File handling is what you need for:\n\
                 • keeping data between runs\n\
                 • application configuration\n\
                 • processing large datasets\n\
                 • logging",
                vec![ContentBlock::new(
                    BlockRole::Example,
                    "# Read a whole file\n\
                     with open(\"example.txt\", encoding=\"utf-8\") as f:\n\
                     \u{20}   content = f.read()\n\n\
                     # Line by line\n\
                     with open(\"example.txt\", encoding=\"utf-8\") as f:\n\
                     \u{20}   for num, line in enumerate(f, 1):\n\
                     \u{20}       print(num, line.strip())\n\n\
                     # Write / append\n\
                     with open(\"out.txt\", \"w\", encoding=\"utf-8\") as f:\n\
                     \u{20}   f.write(\"first line\\n\")\n\
                     with open(\"out.txt\", \"a\", encoding=\"utf-8\") as f:\n\
                     \u{20}   f.write(\"appended line\\n\")\n\n\
                     # JSON\n\
                     import json\n\
                     data = {\"name\": \"Alice\", \"skills\": [\"Python\", \"SQL\"]}\n\
                     with open(\"data.json\", \"w\", encoding=\"utf-8\") as f:\n\
                     \u{20}   json.dump(data, f, indent=2)\n\
                     with open(\"data.json\", encoding=\"utf-8\") as f:\n\
                     \u{20}   loaded = json.load(f)\n\n\
                     # CSV\n\
                     import csv\n\
                     with open(\"users.csv\", \"w\", newline=\"\") as f:\n\
                     \u{20}   w = csv.writer(f)\n\
                     \u{20}   w.writerow([\"name\", \"age\"])\n\
                     \u{20}   w.writerow([\"Anna\", 25])",
                )],
            )],
        },
        TopicEntry {
            topic: Topic::Frameworks,
            title: "🚀 Web Frameworks",
            pages: vec![
                Page::new(
                    "Flask — the microframework",
                    "Flask is a small, unopinionated framework for web applications.",
                    vec![
                        ContentBlock::new(
                            BlockRole::InstallWindows,
                            "# Install Flask on Windows:\n\
                             python -m venv venv\n\
                             venv\\Scripts\\activate\n\
                             pip install flask\n\
                             python -c \"import flask; print(flask.__version__)\"",
                        ),
                        ContentBlock::new(
                            BlockRole::InstallLinux,
                            "# Install Flask on Linux:\n\
                             python3 -m venv venv\n\
                             source venv/bin/activate\n\
                             pip install flask\n\
                             python3 -c \"import flask; print(flask.__version__)\"",
                        ),
                        ContentBlock::new(
                            BlockRole::Example,
                            "# app.py\n\
                             from flask import Flask, jsonify, request\n\n\
                             app = Flask(__name__)\n\n\
                             @app.route(\"/\")\n\
                             def home():\n\
                             \u{20}   return \"<h1>Welcome!</h1>\"\n\n\
                             @app.route(\"/user/<username>\")\n\
                             def show_user(username):\n\
                             \u{20}   return f\"<h1>Profile: {username}</h1>\"\n\n\
                             @app.route(\"/api/data\")\n\
                             def get_data():\n\
                             \u{20}   return jsonify({\"users\": [\"Alice\", \"Ivan\"]})\n\n\
                             if __name__ == \"__main__\":\n\
                             \u{20}   app.run(debug=True, port=5000)",
                        ),
                    ],
                ),
                Page::new(
                    "Django — batteries included",
                    "Django is a full-featured framework for larger web applications.",
                    vec![
                        ContentBlock::new(
                            BlockRole::Install,
                            "python -m venv venv\n\
                             # Windows: venv\\Scripts\\activate\n\
                             # Linux:   source venv/bin/activate\n\
                             pip install django\n\
                             django-admin --version",
                        ),
                        ContentBlock::new(
                            BlockRole::Example,
                            "# Create a project and an app:\n\
                             # django-admin startproject myproject\n\
                             # python manage.py startapp shop\n\n\
                             # models.py\n\
                             from django.db import models\n\n\
                             class Product(models.Model):\n\
                             \u{20}   name = models.CharField(max_length=200)\n\
                             \u{20}   price = models.DecimalField(max_digits=10, decimal_places=2)\n\
                             \u{20}   created_at = models.DateTimeField(auto_now_add=True)\n\n\
                             # views.py\n\
                             from django.shortcuts import render\n\
                             from .models import Product\n\n\
                             def product_list(request):\n\
                             \u{20}   products = Product.objects.all()\n\
                             \u{20}   return render(request, \"list.html\", {\"products\": products})\n\n\
                             # Run: python manage.py runserver",
                        ),
                    ],
                ),
            ],
        },
        TopicEntry {
            topic: Topic::Tools,
            title: "🛠️ Developer Tools",
            pages: vec![
                Page::new(
                    "pip — the package manager",
                    "pip installs and manages Python packages.",
                    vec![
                        ContentBlock::new(
                            BlockRole::WindowsShell,
                            "# Common pip commands (Windows):\n\
                             pip install requests\n\
                             pip install django==4.2.0\n\
                             pip install -r requirements.txt\n\
                             pip install --upgrade package_name\n\
                             pip list\n\
                             pip uninstall package_name",
                        ),
                        ContentBlock::new(
                            BlockRole::LinuxShell,
                            "# On Linux use pip3:\n\
                             pip3 install requests\n\
                             pip3 list\n\
                             pip3 uninstall package_name",
                        ),
                        ContentBlock::new(
                            BlockRole::Example,
                            "# requirements.txt pins a project's dependencies\n\
                             django==4.2.0\n\
                             requests>=2.28.0\n\
                             pandas\n\n\
                             # Install everything at once\n\
                             pip install -r requirements.txt",
                        ),
                    ],
                ),
                Page::new(
                    "Git — version control",
                    "Git tracks changes to your code and makes teamwork possible.",
                    vec![
                        ContentBlock::new(
                            BlockRole::InstallWindows,
                            "# Windows: download from git-scm.com and run the installer,\n\
                             # then use Git Bash or cmd.",
                        ),
                        ContentBlock::new(
                            BlockRole::InstallLinux,
                            "sudo apt update\nsudo apt install git\ngit --version",
                        ),
                        ContentBlock::new(
                            BlockRole::Example,
                            "git init\n\
                             git status\n\
                             git add .\n\
                             git commit -m \"Add new feature\"\n\
                             git log --oneline\n\n\
                             # Branches\n\
                             git checkout -b feature-new\n\
                             git merge feature-new\n\n\
                             # Remotes\n\
                             git remote add origin https://github.com/user/repo.git\n\
                             git push -u origin main\n\
                             git pull\n\n\
                             # .gitignore\n\
                             __pycache__/\n\
                             *.pyc\n\
                             .env\n\
                             venv/",
                        ),
                    ],
                ),
            ],
        },
        TopicEntry {
            topic: Topic::DataScience,
            title: "📊 Data Science",
            pages: vec![
                Page::new(
                    "NumPy and Pandas",
                    "The core libraries for numeric computing and data analysis.",
                    vec![
                        ContentBlock::new(
                            BlockRole::Install,
                            "pip install numpy pandas matplotlib scikit-learn",
                        ),
                        ContentBlock::new(
                            BlockRole::Example,
                            "import numpy as np\n\
                             import pandas as pd\n\n\
                             # NumPy arrays\n\
                             arr = np.array([1, 2, 3, 4, 5])\n\
                             print(np.mean(arr), np.sum(arr))\n\n\
                             # Pandas DataFrames\n\
                             df = pd.DataFrame({\n\
                             \u{20}   \"name\": [\"Alice\", \"Maria\", \"Ivan\"],\n\
                             \u{20}   \"age\": [25, 30, 22],\n\
                             \u{20}   \"city\": [\"Moscow\", \"Berlin\", \"Moscow\"],\n\
                             })\n\
                             print(df.describe())\n\n\
                             # Filtering and grouping\n\
                             print(df[df[\"age\"] > 24])\n\
                             print(df.groupby(\"city\")[\"age\"].mean())",
                        ),
                    ],
                ),
                Page::new(
                    "Machine learning",
                    "A minimal end-to-end example with scikit-learn.",
                    vec![ContentBlock::new(
                        BlockRole::Example,
                        "from sklearn.datasets import load_iris\n\
                         from sklearn.model_selection import train_test_split\n\
                         from sklearn.ensemble import RandomForestClassifier\n\
                         from sklearn.metrics import accuracy_score\n\n\
                         iris = load_iris()\n\
                         X_train, X_test, y_train, y_test = train_test_split(\n\
                         \u{20}   iris.data, iris.target, test_size=0.3, random_state=42\n\
                         )\n\n\
                         model = RandomForestClassifier(n_estimators=100, random_state=42)\n\
                         model.fit(X_train, y_train)\n\n\
                         accuracy = accuracy_score(y_test, model.predict(X_test))\n\
                         print(f\"accuracy: {accuracy:.2%}\")",
                    )],
                ),
            ],
        },
        TopicEntry {
            topic: Topic::Async,
            title: "⚡ Async Programming",
            pages: vec![Page::new(
                "async/await",
                "Asynchronous code shines on I/O-bound workloads:\n\
                 • network requests\n\
                 • database access\n\
                 • file operations\n\
                 • web servers",
                vec![ContentBlock::new(
                    BlockRole::Example,
                    "import asyncio\n\n\
                     async def fetch(url):\n\
                     \u{20}   await asyncio.sleep(1)   # stands in for real I/O\n\
                     \u{20}   return f\"data from {url}\"\n\n\
                     async def main():\n\
                     \u{20}   tasks = [\n\
                     \u{20}       asyncio.create_task(fetch(f\"site-{i}.com\"))\n\
                     \u{20}       for i in range(3)\n\
                     \u{20}   ]\n\
                     \u{20}   results = await asyncio.gather(*tasks)\n\
                     \u{20}   print(results)   # three fetches, one second total\n\n\
                     asyncio.run(main())\n\n\
                     # Real HTTP with aiohttp:\n\
                     # async with aiohttp.ClientSession() as session:\n\
                     #     async with session.get(url) as resp:\n\
                     #         body = await resp.text()",
                )],
            )],
        },
        TopicEntry {
            topic: Topic::Install,
            title: "📥 Installing Python",
            pages: vec![
                Page::new(
                    "Windows",
                    "Step-by-step Python installation on Windows.",
                    vec![ContentBlock::new(
                        BlockRole::Steps,
                        "1. Download Python from the official site: python.org\n\
                         2. Run the installer\n\
                         3. IMPORTANT: check \"Add Python to PATH\"\n\
                         4. Choose \"Install Now\"\n\
                         5. Open a command prompt (cmd)\n\
                         6. Verify: python --version\n\
                         7. Start Python: python",
                    )],
                ),
                Page::new(
                    "Linux",
                    "Installing Python on Linux.",
                    vec![ContentBlock::new(
                        BlockRole::Steps,
                        "1. Open a terminal\n\
                         2. Check whether Python is installed: python3 --version\n\
                         3. If not:\n\
                         \u{20}  Ubuntu/Debian: sudo apt update && sudo apt install python3 python3-pip\n\
                         \u{20}  Fedora: sudo dnf install python3\n\
                         \u{20}  Arch: sudo pacman -S python\n\
                         4. Verify: python3 --version && pip3 --version",
                    )],
                ),
            ],
        },
    ]
}
