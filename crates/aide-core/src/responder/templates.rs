//! Literal reply bodies.

pub const AGE_VERIFICATION: &str = "I notice your question contains adult content. To ensure I provide appropriate assistance, I need to verify: Are you 18 years or older?

Please confirm your age before I can address questions of this nature. If you're under 18, I'd be happy to help you with other topics like education, technology, creative projects, or general life advice instead.";

pub const CAPABILITY_SUMMARY: &str = "**What I can help you with:**
• **Code & Programming** - Get detailed explanations, examples, and debugging help
• **Learning & Education** - Comprehensive explanations on any topic
• **Problem Solving** - Step-by-step guidance for complex challenges
• **Document Analysis** - Upload PDFs for detailed analysis and insights
• **Creative Projects** - Ideas, planning, and execution strategies

Just ask me anything, and I'll provide detailed, reliable information tailored to your needs!";

pub const CODE_INTRO: &str = "I'll provide you with a comprehensive code example that demonstrates best practices, proper structure, and real-world applicability:";

pub const CODE_FOOTER: &str = "**Key Features Explained:**
• **Error Handling**: Proper try-catch blocks and validation
• **Code Organization**: Clean, modular structure with clear separation of concerns
• **Documentation**: Comprehensive comments explaining functionality
• **Best Practices**: Following industry standards and conventions
• **Scalability**: Code designed to be easily extended and maintained

**Additional Considerations:**
• **Performance**: Optimized for efficiency and speed
• **Security**: Includes basic security considerations
• **Testing**: Structure allows for easy unit testing
• **Maintainability**: Clear naming conventions and logical flow

Would you like me to explain any specific part in more detail, show you how to extend this code, or help you adapt it for your specific use case?";

pub const HELP_INTRO: &str = "I'm designed to provide comprehensive, detailed assistance across multiple domains. Here's how I can help you:";

pub const HELP_TOPICS: [&str; 8] = [
    "**Programming & Development** - Code examples, debugging, best practices, architecture guidance",
    "**Learning & Education** - Detailed explanations, step-by-step tutorials, concept breakdowns",
    "**Problem Solving** - Analytical approaches, decision frameworks, solution strategies",
    "**Document Analysis** - PDF processing, content extraction, summarization, insights",
    "**Creative Projects** - Brainstorming, planning, execution strategies, creative solutions",
    "**Technical Writing** - Documentation, explanations, technical communication",
    "**Data Analysis** - Statistical analysis, data interpretation, visualization guidance",
    "**Career Guidance** - Professional development, skill building, industry insights",
];

pub const HELP_FOOTER: &str = "**My Approach:**
• **Detailed Explanations**: I provide thorough, step-by-step guidance
• **Practical Examples**: Real-world applications and use cases
• **Multiple Perspectives**: Different approaches to solve problems
• **Context Awareness**: I remember our conversation for better assistance
• **Reliable Information**: Accurate, up-to-date, and well-researched responses

**Special Features:**
• **Code Generation**: Complete, production-ready code examples
• **File Upload**: Analyze PDF documents for insights and summaries
• **Conversation History**: Access to all our previous discussions
• **Personality Modes**: Tailored communication style to match your preferences

What specific area would you like to explore? I'm here to provide detailed, reliable assistance tailored to your exact needs!";

// ============================================================================
// Code samples
// ============================================================================

pub const JAVASCRIPT_SAMPLE: &str = r#"```javascript
// A small calculator with chaining support
function createCalculator() {
  const calculator = {
    add: (a, b) => a + b,
    subtract: (a, b) => a - b,
    multiply: (a, b) => a * b,
    divide: (a, b) => {
      if (b === 0) throw new Error('Division by zero');
      return a / b;
    },
    power: (base, exponent) => Math.pow(base, exponent),
    factorial: (n) => {
      if (n < 0) throw new Error('Factorial of negative number');
      return n <= 1 ? 1 : n * calculator.factorial(n - 1);
    },
    chain(initialValue) {
      let value = initialValue;
      const api = {
        add: (n) => { value += n; return api; },
        multiply: (n) => { value *= n; return api; },
        result: () => value,
      };
      return api;
    },
  };

  return calculator;
}

const calc = createCalculator();
console.log(calc.add(5, 3));                             // 8
console.log(calc.factorial(5));                          // 120
console.log(calc.chain(10).add(5).multiply(2).result()); // 30
```"#;

pub const PYTHON_SAMPLE: &str = r#"```python
class Calculator:
    """Calculator that keeps a history of every operation."""

    def __init__(self):
        self.history = []

    def _log(self, operation, result):
        self.history.append(f"{operation} = {result}")
        return result

    def add(self, a, b):
        return self._log(f"{a} + {b}", a + b)

    def subtract(self, a, b):
        return self._log(f"{a} - {b}", a - b)

    def multiply(self, a, b):
        return self._log(f"{a} * {b}", a * b)

    def divide(self, a, b):
        if b == 0:
            raise ValueError("Division by zero is not allowed")
        return self._log(f"{a} / {b}", a / b)

    def factorial(self, n):
        if n < 0:
            raise ValueError("Factorial of negative number is undefined")
        result = 1
        for i in range(2, n + 1):
            result *= i
        return self._log(f"{n}!", result)

    def get_history(self):
        return list(self.history)


calc = Calculator()
print(calc.add(10, 5))      # 15
print(calc.multiply(3, 4))  # 12
print(calc.factorial(5))    # 120
print(calc.get_history())
```"#;

pub const ADVANCED_PYTHON_SAMPLE: &str = r#"```python
import json
import statistics
from datetime import datetime
from typing import Dict, List, Union

Number = Union[int, float]


class DataAnalyzer:
    """Collects numbers, removes outliers and exports summary statistics."""

    def __init__(self, name: str = "Data Analysis"):
        self.name = name
        self.data: List[Number] = []
        self.metadata: Dict = {"created_at": datetime.now().isoformat(), "operations": 0}

    def add_data(self, values: Union[List[Number], Number]) -> None:
        if isinstance(values, (int, float)):
            values = [values]
        for value in values:
            if not isinstance(value, (int, float)):
                raise TypeError(f"Invalid data type: {type(value)}")
        self.data.extend(values)
        self._touch()

    def remove_outliers(self, factor: float = 1.5) -> List[Number]:
        if len(self.data) < 4:
            raise ValueError("Not enough data for outlier removal")
        q1, _, q3 = statistics.quantiles(self.data, n=4)
        iqr = q3 - q1
        low, high = q1 - factor * iqr, q3 + factor * iqr
        self.data = [x for x in self.data if low <= x <= high]
        self._touch()
        return self.data

    def summary(self) -> Dict[str, float]:
        if not self.data:
            raise ValueError("No data available")
        return {
            "count": len(self.data),
            "mean": statistics.mean(self.data),
            "median": statistics.median(self.data),
            "stdev": statistics.stdev(self.data) if len(self.data) > 1 else 0.0,
            "min": min(self.data),
            "max": max(self.data),
        }

    def export(self, filename: str) -> str:
        path = f"{filename}.json"
        with open(path, "w") as handle:
            json.dump({"name": self.name, "summary": self.summary(), "meta": self.metadata}, handle, indent=2)
        return path

    def _touch(self) -> None:
        self.metadata["operations"] += 1
        self.metadata["last_modified"] = datetime.now().isoformat()


analyzer = DataAnalyzer("Sales")
analyzer.add_data([12, 15, 14, 10, 18, 95, 13, 16])
analyzer.remove_outliers()
print(analyzer.summary())
print(f"Data exported to: {analyzer.export('sales_report')}")
```"#;

pub const REACT_SAMPLE: &str = r##"```jsx
import React, { useCallback, useEffect, useState } from 'react';

const TodoApp = () => {
  const [todos, setTodos] = useState([]);
  const [input, setInput] = useState('');
  const [filter, setFilter] = useState('all');

  useEffect(() => {
    const saved = localStorage.getItem('todos');
    if (saved) setTodos(JSON.parse(saved));
  }, []);

  useEffect(() => {
    localStorage.setItem('todos', JSON.stringify(todos));
  }, [todos]);

  const addTodo = useCallback((text) => {
    if (!text.trim()) return;
    setTodos((prev) => [...prev, { id: Date.now(), text: text.trim(), completed: false }]);
    setInput('');
  }, []);

  const toggleTodo = useCallback((id) => {
    setTodos((prev) => prev.map((t) => (t.id === id ? { ...t, completed: !t.completed } : t)));
  }, []);

  const removeTodo = useCallback((id) => {
    setTodos((prev) => prev.filter((t) => t.id !== id));
  }, []);

  const visible = todos.filter((t) =>
    filter === 'active' ? !t.completed : filter === 'completed' ? t.completed : true
  );

  return (
    <div className="todo-app">
      <form onSubmit={(e) => { e.preventDefault(); addTodo(input); }}>
        <input value={input} onChange={(e) => setInput(e.target.value)} placeholder="Add a todo..." />
        <button type="submit">Add</button>
      </form>
      <nav>
        {['all', 'active', 'completed'].map((f) => (
          <button key={f} className={filter === f ? 'active' : ''} onClick={() => setFilter(f)}>
            {f}
          </button>
        ))}
      </nav>
      <ul>
        {visible.map((todo) => (
          <li key={todo.id}>
            <input type="checkbox" checked={todo.completed} onChange={() => toggleTodo(todo.id)} />
            <span className={todo.completed ? 'done' : ''}>{todo.text}</span>
            <button onClick={() => removeTodo(todo.id)}>Delete</button>
          </li>
        ))}
      </ul>
      {visible.length === 0 && <p>Nothing to show.</p>}
    </div>
  );
};

export default TodoApp;
```"##;

pub const HTML_CSS_SAMPLE: &str = r##"```html
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Status Dashboard</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }

        body {
            font-family: 'Segoe UI', sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            padding: 20px;
        }

        .dashboard {
            max-width: 1100px;
            margin: 0 auto;
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
            gap: 20px;
        }

        .card {
            background: rgba(255, 255, 255, 0.95);
            border-radius: 15px;
            padding: 25px;
            box-shadow: 0 8px 32px rgba(0, 0, 0, 0.1);
            transition: transform 0.3s ease;
        }

        .card:hover { transform: translateY(-5px); }

        .metric { display: flex; justify-content: space-between; padding: 12px 0; }

        .progress { height: 8px; background: #e0e0e0; border-radius: 4px; overflow: hidden; }

        .progress-fill {
            height: 100%;
            background: linear-gradient(90deg, #667eea, #764ba2);
            transition: width 1s ease-out;
        }

        @media (max-width: 768px) {
            .dashboard { grid-template-columns: 1fr; }
        }
    </style>
</head>
<body>
    <div class="dashboard">
        <div class="card">
            <h2>System Status</h2>
            <div class="metric"><span>CPU</span><span class="metric-value">45%</span></div>
            <div class="progress"><div class="progress-fill" style="width: 45%"></div></div>
            <div class="metric"><span>Memory</span><span class="metric-value">62%</span></div>
            <div class="progress"><div class="progress-fill" style="width: 62%"></div></div>
        </div>
        <div class="card">
            <h2>Revenue</h2>
            <div class="metric"><span>Today</span><span class="metric-value">$12,450</span></div>
            <button onclick="refresh()">Refresh</button>
        </div>
    </div>
    <script>
        function refresh() {
            document.querySelectorAll('.metric-value').forEach((metric) => {
                if (metric.textContent.includes('%')) {
                    metric.textContent = Math.floor(Math.random() * 100) + '%';
                }
            });
        }
    </script>
</body>
</html>
```"##;

// ============================================================================
// Topic bodies
// ============================================================================

pub const HEALTH: &str = "**Health and Wellness - Comprehensive Overview:**

While I can provide general health information, it's crucial to understand that I cannot replace professional medical advice. Here's what I can help you with:

**General Wellness Topics:**
• **Nutrition Basics**: Balanced diet principles, macronutrients, meal planning
• **Exercise Guidelines**: Fitness fundamentals, workout planning, activity recommendations
• **Mental Health**: Stress management techniques, mindfulness practices, work-life balance
• **Sleep Hygiene**: Sleep optimization strategies, healthy sleep habits
• **Preventive Care**: General health maintenance, lifestyle factors

**Important Disclaimers:**
• Always consult healthcare professionals for medical concerns
• Individual health needs vary significantly
• Emergency situations require immediate medical attention
• Medications and treatments should only be prescribed by doctors

**Evidence-Based Approach:**
I base health information on established medical guidelines, peer-reviewed research, and recognized health organizations like WHO, CDC, and medical institutions.

Would you like me to elaborate on any specific wellness topic? I can provide detailed information while emphasizing the importance of professional medical guidance.";

pub const TECHNOLOGY: &str = "**Technology Landscape - Comprehensive Analysis:**

Technology is rapidly evolving, and I can provide detailed insights across multiple domains:

**Current Technology Trends:**
• **Artificial Intelligence**: Machine learning, deep learning, neural networks, AI applications
• **Cloud Computing**: AWS, Azure, Google Cloud, serverless architecture, microservices
• **Cybersecurity**: Threat landscape, security best practices, encryption, privacy protection
• **Web Development**: Modern frameworks, progressive web apps, responsive design
• **Mobile Development**: Native vs cross-platform, app optimization, user experience
• **Data Science**: Big data analytics, data visualization, statistical modeling
• **Blockchain**: Cryptocurrency, smart contracts, decentralized applications
• **IoT**: Internet of Things, smart devices, industrial automation

**Emerging Technologies:**
• **Quantum Computing**: Quantum algorithms, potential applications, current limitations
• **Extended Reality (XR)**: VR, AR, MR applications and development
• **Edge Computing**: Distributed computing, latency reduction, real-time processing
• **5G Networks**: Enhanced connectivity, new application possibilities

**Technology Implementation:**
• **Best Practices**: Code quality, testing, documentation, version control
• **Architecture Patterns**: Scalable design, performance optimization, security integration
• **Project Management**: Agile methodologies, DevOps practices, continuous integration

What specific technology area interests you? I can provide detailed explanations, practical examples, and implementation guidance tailored to your level of expertise.";

pub const EDUCATION: &str = "**Learning and Education - Comprehensive Approach:**

Education is a lifelong journey, and I'm here to support your learning goals with detailed, structured guidance:

**Learning Methodologies:**
• **Active Learning**: Engagement techniques, hands-on practice, real-world application
• **Spaced Repetition**: Memory consolidation, long-term retention strategies
• **Multimodal Learning**: Visual, auditory, kinesthetic learning approaches
• **Problem-Based Learning**: Practical application, critical thinking development
• **Collaborative Learning**: Group dynamics, peer learning, knowledge sharing

**Subject Areas I Can Help With:**
• **STEM Fields**: Mathematics, science, engineering, technology with detailed explanations
• **Languages**: Grammar, vocabulary, communication skills, writing techniques
• **Humanities**: History, literature, philosophy, critical analysis
• **Business**: Economics, management, marketing, entrepreneurship
• **Creative Arts**: Design principles, creative processes, artistic techniques

**Study Strategies:**
• **Goal Setting**: SMART objectives, milestone planning, progress tracking
• **Time Management**: Effective scheduling, productivity techniques, focus strategies
• **Note-Taking**: Structured methods, information organization, review systems
• **Test Preparation**: Study plans, practice strategies, anxiety management
• **Research Skills**: Source evaluation, information synthesis, academic writing

**Personalized Learning:**
I adapt my explanations to your current knowledge level and learning style, providing:
• Step-by-step breakdowns of complex concepts
• Multiple examples and analogies for clarity
• Practice problems and application exercises
• Progress assessment and feedback

What subject or learning goal would you like to explore? I'll provide comprehensive, structured guidance tailored to your specific needs and learning objectives.";

pub const TRAVEL: &str = "**Travel Planning and Exploration - Comprehensive Guide:**

Travel opens minds and creates lasting memories. Here's how I can help you plan amazing adventures:

**Trip Planning Essentials:**
• **Destination Research**: Climate, culture, attractions, local customs, safety considerations
• **Budget Planning**: Cost estimation, money-saving strategies, expense tracking
• **Itinerary Creation**: Time optimization, must-see attractions, hidden gems
• **Accommodation**: Hotel types, booking strategies, location considerations
• **Transportation**: Flight booking, local transport, rental options, route planning

**Travel Categories:**
• **Adventure Travel**: Hiking, extreme sports, outdoor activities, gear recommendations
• **Cultural Tourism**: Museums, historical sites, local experiences, cultural etiquette
• **Business Travel**: Efficiency tips, networking opportunities, work-life balance
• **Family Travel**: Kid-friendly activities, safety considerations, educational opportunities
• **Solo Travel**: Safety tips, social opportunities, personal growth experiences
• **Sustainable Travel**: Eco-friendly options, responsible tourism, local impact

**Practical Considerations:**
• **Documentation**: Passport, visa requirements, travel insurance, health certificates
• **Health & Safety**: Vaccinations, medical preparations, emergency planning
• **Packing**: Climate-appropriate clothing, essential items, luggage optimization
• **Technology**: Travel apps, communication tools, navigation systems
• **Cultural Preparation**: Language basics, social norms, tipping customs

What type of travel experience are you planning? I'll provide detailed, practical guidance to help you create an unforgettable journey while ensuring safety and cultural sensitivity.";

pub const FINANCE: &str = "**Financial Planning and Management - Comprehensive Overview:**

Smart financial planning is crucial for long-term success. Here's detailed guidance across key financial areas:

**Personal Finance Fundamentals:**
• **Budgeting**: Income tracking, expense categorization, spending optimization
• **Emergency Fund**: 3-6 months expenses, high-yield savings, accessibility planning
• **Debt Management**: Debt consolidation, payment strategies, interest optimization
• **Credit Building**: Credit score improvement, responsible credit use, monitoring
• **Insurance**: Life, health, disability, property insurance evaluation

**Investment Strategies:**
• **Investment Basics**: Risk tolerance, diversification, asset allocation principles
• **Retirement Planning**: 401(k), IRA, pension planning, withdrawal strategies
• **Stock Market**: Fundamental analysis, technical analysis, market psychology
• **Real Estate**: Property investment, REITs, market analysis, financing options
• **Alternative Investments**: Bonds, commodities, cryptocurrency considerations

**Advanced Financial Planning:**
• **Tax Optimization**: Tax-efficient investing, deductions, strategic planning
• **Estate Planning**: Wills, trusts, beneficiary designations, wealth transfer
• **Business Finance**: Cash flow management, business loans, investment planning

**Risk Management:**
• **Market Volatility**: Diversification strategies, dollar-cost averaging, rebalancing
• **Inflation Protection**: TIPS, real assets, inflation-hedged investments
• **Economic Cycles**: Recession planning, opportunity identification, portfolio adjustment

**Important Disclaimers:**
• This is educational information, not personalized financial advice
• Always consult with qualified financial advisors for major decisions
• Individual circumstances vary significantly
• Past performance doesn't guarantee future results

What specific financial topic would you like to explore in detail? I can provide comprehensive analysis, practical strategies, and educational resources while emphasizing the importance of professional financial guidance for your specific situation.";

// ============================================================================
// Fallback bodies
// ============================================================================

pub const GENERAL: [&str; 2] = [
    "I understand you're looking for detailed information on this topic. Let me provide you with a comprehensive response that covers multiple aspects:

**Analytical Approach:**
I'll break down your question into key components and address each systematically, providing both theoretical understanding and practical applications.

**Detailed Explanation:**
Based on your inquiry, I can offer insights that include:
• **Fundamental Concepts**: Core principles and underlying mechanisms
• **Practical Applications**: Real-world examples and use cases
• **Best Practices**: Proven strategies and recommended approaches
• **Common Challenges**: Potential obstacles and solution strategies
• **Advanced Considerations**: Deeper insights for comprehensive understanding

**Contextual Relevance:**
I'll tailor my response to your specific situation, considering:
• Your apparent level of expertise
• Practical implementation requirements
• Current industry standards and trends
• Potential future developments

**Actionable Insights:**
My goal is to provide you with information that's not just informative but immediately useful, including:
• Step-by-step guidance where applicable
• Resource recommendations for further learning
• Tools and techniques you can implement
• Metrics for measuring success

Could you provide a bit more context about your specific situation or what aspect you'd like me to focus on? This will help me give you even more targeted and valuable insights.",
    "This is exactly the kind of comprehensive question I excel at addressing. Let me provide you with a detailed, multi-faceted response:

**In-Depth Analysis:**
I approach complex topics by examining them from multiple angles:
• **Historical Context**: How this topic has evolved over time
• **Current State**: Present-day understanding and applications
• **Future Implications**: Emerging trends and potential developments
• **Interdisciplinary Connections**: How this relates to other fields

**Structured Response Framework:**
• **Definition and Scope**: Clear explanation of key terms and boundaries
• **Core Components**: Breaking down complex concepts into manageable parts
• **Relationships and Dependencies**: How different elements interact
• **Practical Implementation**: Real-world application strategies
• **Evaluation Criteria**: How to measure success and effectiveness

**Evidence-Based Information:**
My responses are grounded in:
• Established research and proven methodologies
• Industry best practices and standards
• Expert consensus and peer-reviewed sources
• Real-world case studies and examples

**Customized Guidance:**
I adapt my explanations to provide maximum value by:
• Matching complexity to your apparent expertise level
• Focusing on aspects most relevant to your needs
• Providing both overview and detailed specifics
• Offering multiple perspectives and approaches

What particular aspect would you like me to elaborate on further? I'm here to provide as much detail and practical guidance as you need.",
];
