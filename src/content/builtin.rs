//! Built-in PyBricks course: slide deck and question bank.

use super::{Question, Slide};

fn slide(icon: &str, title: &str, content: &str) -> Slide {
    Slide {
        title: title.to_string(),
        icon: icon.to_string(),
        content: content.to_string(),
    }
}

fn question(prompt: &str, answers: [&str; 4], correct_index: usize, explanation: &str) -> Question {
    Question {
        prompt: prompt.to_string(),
        answers: answers.map(str::to_string),
        correct_index,
        explanation: explanation.to_string(),
    }
}

pub(super) fn slides() -> Vec<Slide> {
    vec![
        slide(
            "🐍",
            "What is Python?",
            r#"
> Python is a programming language that talks like you do!

Instead of complicated codes, Python uses words you already know:

| print("Hello, Robot!")
| if temperature > 100:
|     turn_on_fan()

It's designed to be easy to read and write.
"#,
        ),
        slide(
            "✨",
            "Why Use Python?",
            r#"
# ✓ Python: easy to read!
| print("Hello!")
|
| for i in range(5):
|     motor.run(100)

# ✗ Other languages: more confusing!
| printf("Hello!");
|
| for(int i=0;i<5;i++){
|   motor.run(100);
| }

> Python lets you focus on solving problems, not memorizing syntax!
"#,
        ),
        slide(
            "⚔️",
            "Python vs Block Programming",
            r#"
# Why Python instead of LEGO's block programming?
* 📝 Source Control (Git): track changes, work as a team, never lose code!
* 🔍 Easy to Read & Review: see all your code at once. No scrolling through blocks!
* 💾 Save & Share: copy, paste, backup easily. Text files work everywhere!
* 🚀 Professional Skills: learn real programming used in jobs & college!
* ⚡ More Powerful: do complex logic, math, and algorithms easily!
"#,
        ),
        slide(
            "🎯",
            "What Can Python Do?",
            r#"
# Python is like a Swiss Army knife - it does EVERYTHING!
* 🌐 Build websites (Instagram, YouTube)
* 🎮 Create games
* 🤖 Control robots (that's us!)
* 📊 Analyze data
* 🧠 Power AI & machine learning
* 📱 Make mobile apps

> In this class, we use Python to control LEGO robots!
"#,
        ),
        slide(
            "🧱",
            "What is PyBricks?",
            r#"
> PyBricks = Python + LEGO Bricks

It's a library (toolkit) that makes controlling LEGO robots super easy!

| # Control your SPIKE Prime robot with simple commands:
|
| # Drive forward
| robot.drivebase.straight(500)
|
| # Turn right
| robot.drivebase.turn(90)
|
| # Show message
| robot.hub.display.text("Hi!")
"#,
        ),
        slide(
            "📚",
            "What's a Library?",
            r#"
# Think of it like LEGO blocks...

❌ Without a library:
* Mold your own plastic
* Create every piece from scratch
* Takes forever!

✅ With a library:
* Use pre-made LEGO bricks
* Snap them together
* Build amazing things fast!

> A library = Pre-written code you can use in your programs!
"#,
        ),
        slide(
            "⚡",
            "Why Use PyBricks Library?",
            r#"
# Without PyBricks: 😰
| # Hundreds of lines of complicated code to control a motor:
| calculate_voltage_signals()
| manage_motor_timing()
| sync_multiple_motors()
| handle_acceleration_curves()
| monitor_position_feedback()
| # ... and much more!

# With PyBricks: 😎
| # That's it!
| motor.run(500)
"#,
        ),
        slide(
            "🚀",
            "How to Use PyBricks",
            r#"
# Three Simple Steps:

1️⃣ Import what you need
| from pybricks.hubs import PrimeHub

2️⃣ Create objects
| hub = PrimeHub()

3️⃣ Use them!
| hub.display.text("Hello!")
"#,
        ),
        slide(
            "🎓",
            "In Our Robot Projects...",
            r#"
> Good news! We made it even easier!

The RobotController does all the setup for you:

| def run(robot: RobotController, display):
|     # Everything is ready to use!
|
|     # Drive forward
|     robot.drivebase.straight(500)
|
|     # Turn right
|     robot.drivebase.turn(90)
|
|     # Count down
|     display.show_countdown(3)

* ✅ Robot already initialized
* ✅ Motors already configured
* ✅ Just write your mission logic!
"#,
        ),
        slide(
            "🏗️",
            "Our Project Setup System",
            r#"
> We built automated scripts that do the hard work for you!

1️⃣ Create Season
| python new_season.py

2️⃣ Add Missions
| python new_mission.py

3️⃣ Write & Run
Code → Upload → Test!

No manual configuration. No errors. Just robot fun!
"#,
        ),
        slide(
            "🎬",
            "Step 1: Create Your Season",
            r#"
| python new_season.py

# The script asks you simple questions:
* ❓ What's your season name?
* ❓ What's your team name?
* 🔌 Which ports are your motors plugged into?
* 📏 What size are your wheels?
* 📐 How far apart are your wheels?

> Then it creates a complete season folder, perfectly configured for YOUR robot!
"#,
        ),
        slide(
            "📂",
            "What's in Your Season Folder?",
            r#"
# Everything you need, automatically generated:
* ⚙️ season_config.py: your robot's specs (ports, wheel size, speeds)
* 📋 season_menu.py: mission selector (auto-updated!)
* 🤖 robot_controller.py: robot brain (handles all setup)
* 🛠️ Utilities: helper tools for displays, line following, etc.
"#,
        ),
        slide(
            "🎯",
            "Step 2: Add Missions",
            r#"
> Run from INSIDE your season folder:

| cd my_season
| python ../new_mission.py

# What it does:
* ✅ Asks for mission name & description
* ✅ Asks for speed settings (slow, medium, fast)
* ✅ Lets you choose Simple or Guided template
* ✅ Creates mission file with helpful examples
* ✨ Automatically updates season_menu.py!
"#,
        ),
        slide(
            "✍️",
            "Step 3: Write Your Mission Code",
            r#"
# Edit your mission file - it has helpful examples!

Simple template: quick-start examples at the top.
Guided template: quick-start + detailed examples by category.

| def run(robot: RobotController, display):
|     """Your mission code goes here!"""
|
|     # Uncomment examples from the template:
|     # robot.drivebase.straight(500)
|     # robot.drivebase.turn(90)
|     # display.show_countdown(3)
|
|     # Write your own mission logic!
|     robot.drivebase.straight(300)
|     robot.drivebase.turn(90)
|     robot.drivebase.straight(300)

> The template has tons of examples in comments - just uncomment and modify!
"#,
        ),
        slide(
            "🚀",
            "Step 4: Upload and Run!",
            r#"
# Almost there!

1️⃣ Upload season_menu.py to hub
PyBricks automatically uploads all the other files it needs through imports!
All files must be in the same folder (flat structure).

2️⃣ Run the program on the hub
When you run season_menu.py, it shows your mission selector.

3️⃣ Use hub buttons to pick your mission
← → to navigate, Center button to select and run.

> 🎉 Your robot runs your mission!
"#,
        ),
    ]
}

pub(super) fn questions() -> Vec<Question> {
    vec![
        // What is Python?
        question(
            "What is Python?",
            [
                "A type of snake that lives in computers",
                "A programming language that uses human-readable words",
                "A game for building robots",
                "A special type of LEGO brick",
            ],
            1,
            "Python is a programming language that's designed to be easy to read and write. It uses words like 'if', 'for', and 'print' that make sense to humans, unlike older languages that look more like secret codes!",
        ),
        question(
            "Why do programmers like using Python?",
            [
                "It's the fastest programming language",
                "It only works on expensive computers",
                "It's easy to read and learn, with simple syntax",
                "It can only be used for games",
            ],
            2,
            "Python is popular because its code looks almost like English! For example, to print 'Hello', you just write: print('Hello'). This makes it perfect for beginners and lets you focus on solving problems instead of memorizing complicated syntax.",
        ),
        question(
            "What kind of tasks can you do with Python?",
            [
                "Only make websites",
                "Only control robots",
                "Many things: websites, games, robots, data analysis, and more",
                "Only do math homework",
            ],
            2,
            "Python is incredibly versatile! It's used to build websites (like Instagram), create games, analyze data, control robots (like our SPIKE Prime!), and even power artificial intelligence. It's like a Swiss Army knife for programming!",
        ),
        // What is PyBricks?
        question(
            "What is PyBricks?",
            [
                "A type of LEGO brick made of Python snakes",
                "A Python library specifically designed to control LEGO robots",
                "A video game about building with LEGO",
                "A new flavor of ice cream",
            ],
            1,
            "PyBricks is a special Python library (a collection of pre-written code) that makes it easy to control LEGO robots like the SPIKE Prime. Instead of writing complicated low-level code, you can use simple commands like 'drive forward' or 'turn left'!",
        ),
        question(
            "What does PyBricks let you control on your LEGO robot?",
            [
                "Only the motors",
                "Only the display screen",
                "Motors, sensors, display, speakers, lights, and more",
                "Nothing - it's just for planning",
            ],
            2,
            "PyBricks gives you control over everything on your LEGO SPIKE Prime hub! You can control motors to make it move, read sensors to detect colors or obstacles, show patterns on the 5×5 LED display, play sounds, and even check the battery level.",
        ),
        question(
            "How do you make your robot drive forward in PyBricks?",
            [
                "robot.drivebase.straight(500)",
                "robot.go.forward.now()",
                "drive_forward(yes)",
                "move.robot.ahead",
            ],
            0,
            "In PyBricks, you use 'robot.drivebase.straight(500)' to drive forward 500 millimeters. The number tells the robot how far to go. Negative numbers make it go backward! This simple command handles all the complicated motor coordination for you.",
        ),
        // Why use libraries?
        question(
            "What is a 'library' in programming?",
            [
                "A building where books are stored",
                "A collection of pre-written code you can use in your programs",
                "A type of computer memory",
                "A list of rules you must follow",
            ],
            1,
            "A programming library is like a toolbox full of ready-made tools! Instead of building everything from scratch, you can use code that other programmers have already written and tested. It's like using LEGO bricks instead of molding your own plastic!",
        ),
        question(
            "Why is using a library like PyBricks helpful?",
            [
                "It makes your code longer and more complicated",
                "It saves time by providing ready-made functions for common tasks",
                "It only works on Tuesdays",
                "It makes robots slower",
            ],
            1,
            "Libraries like PyBricks save you tons of time! Instead of writing hundreds of lines of code to control a motor, you can use one simple command like 'motor.run(500)'. This lets you focus on making your robot do cool things instead of figuring out low-level technical details!",
        ),
        question(
            "Without PyBricks, what would you need to do to control motors?",
            [
                "Just think about it really hard",
                "Write complex code to send electrical signals and manage motor timing",
                "Use a remote control instead",
                "Motors can't be controlled without PyBricks",
            ],
            1,
            "Without libraries like PyBricks, you'd have to write detailed code to send precise electrical signals to motors, calculate speeds, handle acceleration, sync multiple motors, and manage timing. PyBricks does all this complicated work for you with simple commands!",
        ),
        // How to use PyBricks
        question(
            "What's the first thing your PyBricks program needs to do?",
            [
                "Print 'Hello World' on the screen",
                "Import the PyBricks modules you want to use",
                "Calculate the meaning of life",
                "Delete all your files",
            ],
            1,
            "Before you can use PyBricks features, you need to import them! For example: 'from pybricks.hubs import PrimeHub'. This tells Python to load the code for the SPIKE Prime hub so you can use it in your program. Think of it like opening a toolbox before you start working!",
        ),
        question(
            "In our robot projects, what does 'robot.drivebase.turn(90)' do?",
            [
                "Makes the robot explode",
                "Turns the robot 90 degrees to the right",
                "Sets the robot's age to 90",
                "Makes the robot drive 90 millimeters",
            ],
            1,
            "The command 'robot.drivebase.turn(90)' makes your robot turn 90 degrees (a right angle) to the right. If you use a negative number like turn(-90), it turns left instead! The robot's built-in gyro sensor helps make these turns accurate.",
        ),
        question(
            "If you want your robot to wait for 2 seconds before doing something, what should you use?",
            ["wait(2000)", "sleep(2)", "pause(2 seconds)", "hold_on(2)"],
            0,
            "In PyBricks, you use 'wait(2000)' to pause for 2 seconds. The number is in milliseconds, so 2000 milliseconds = 2 seconds. This is super useful when you want your robot to drive for a certain amount of time or wait between movements!",
        ),
        question(
            "What's TRUE about using the robot in our season missions?",
            [
                "You have to initialize everything yourself every time",
                "The RobotController already initialized everything - just use robot.drivebase!",
                "You need to write 100 lines of setup code first",
                "The robot programs itself",
            ],
            1,
            "Great news! In our project, the RobotController class does all the initialization for you. When your mission's run() function receives the 'robot' parameter, everything is ready to go - motors, sensors, display, everything! You just focus on making your robot do cool things!",
        ),
        // Using the project: setup
        question(
            "What command creates a new season for your robot?",
            [
                "python new_season.py",
                "python create_season.py",
                "python start_robot.py",
                "python make_season.py",
            ],
            0,
            "You use 'python new_season.py' to create a new season! This script asks you questions about your robot (motor ports, wheel size, etc.) and generates a complete season folder with all the files you need, perfectly configured for YOUR robot.",
        ),
        question(
            "What does new_season.py ask you about?",
            [
                "Only your team name",
                "Your robot's motor ports, wheel size, and team information",
                "What color you like",
                "How fast you can run",
            ],
            1,
            "new_season.py asks important questions about your actual robot: which ports your motors are plugged into, how big your wheels are, how far apart they are, and your team info. It uses these answers to create a configuration file (season_config.py) that matches YOUR specific robot!",
        ),
        question(
            "Why do you need to measure your robot's wheels?",
            [
                "Just for fun",
                "So the robot knows how far it actually travels when motors turn",
                "To make the robot look pretty",
                "Measurements don't matter",
            ],
            1,
            "Wheel measurements are crucial for accuracy! When you tell the robot to drive 500mm, it needs to know your wheel size to calculate how many rotations that takes. Bigger wheels = fewer rotations needed. Accurate measurements = accurate movements!",
        ),
        // Using the project: missions
        question(
            "Where do you run the new_mission.py script from?",
            [
                "From the project root folder",
                "From inside your season folder",
                "From your home directory",
                "It doesn't matter where",
            ],
            1,
            "You must run new_mission.py from INSIDE your season folder! The script needs to access season_config.py and season_menu.py in the current folder. Example: 'cd my_season' then 'python ../new_mission.py'",
        ),
        question(
            "What does new_mission.py automatically update for you?",
            [
                "Nothing - you have to update everything manually",
                "Only the mission file",
                "The season_menu.py file with imports and mission options",
                "Your robot's firmware",
            ],
            2,
            "This is the magic! new_mission.py automatically updates season_menu.py to add the import statement AND add your mission to the missions dictionary. You never have to manually edit season_menu.py - the script does it all for you!",
        ),
        question(
            "What file contains your robot's motor ports and wheel measurements?",
            [
                "robot_settings.py",
                "config.py",
                "season_config.py",
                "mission_config.py",
            ],
            2,
            "season_config.py is where all your robot-specific settings live! It has the motor ports, motor directions, wheel diameter, axle track (distance between wheels), and default speeds. This file is generated by new_season.py based on your answers.",
        ),
        // Using the project: coding and running
        question(
            "What function do you write your mission logic in?",
            [
                "def main():",
                "def start():",
                "def run(robot: RobotController, display):",
                "def mission():",
            ],
            2,
            "Every mission has a run() function that receives two parameters: 'robot' (the RobotController with everything initialized) and 'display' (helper for showing patterns). This is where you write all your robot's movements and actions!",
        ),
        question(
            "What two parameters does the run() function receive?",
            [
                "robot and motor",
                "robot and RobotController",
                "hub and display",
                "robot and display",
            ],
            3,
            "The run() function receives 'robot' (the RobotController instance with drivebase, hub, attachments, etc. all ready to use) and 'display' (a helper object with shortcuts like show_countdown and show_completion_checkmark).",
        ),
        question(
            "When uploading files to the SPIKE Prime hub, how should they be organized?",
            [
                "In separate folders by type",
                "All .py files in the same flat folder (no subfolders)",
                "In a missions/ subfolder",
                "Organization doesn't matter",
            ],
            1,
            "IMPORTANT: PyBricks MicroPython doesn't support subdirectories! All your .py files must be uploaded to the same folder on the hub with NO subfolders. This is a PyBricks limitation - imports must be simple like 'import mission_01' not 'from missions.mission_01'.",
        ),
        question(
            "What file do you run on the hub to see your mission menu?",
            ["main.py", "start.py", "season_menu.py", "robot_controller.py"],
            2,
            "You run season_menu.py on the hub! This file creates a menu on the hub's display showing all your missions. Use the left/right buttons to navigate and the center button to select and run a mission. The menu was automatically set up by new_season.py and updated by new_mission.py!",
        ),
    ]
}
