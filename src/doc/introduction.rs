/*!
# Introductory Tutorial for HullOS Script

HullOS script is typed a line at a time over the serial link. A line
that stands alone runs as soon as you press ENTER. This is immediate
mode, and it is the quickest way to find out what the robot can do.

<pre><code>&nbsp;> red
&nbsp;> move 100
&nbsp;> turn 90
</code></pre>

Upper and lower case are the same to the robot, and the two spellings
`colour` and `color` are both accepted.

## Programs

Lines between `begin` and `end` are compiled into a program and sent to
the robot's store instead of running. When `end` arrives the robot
answers `OK`, remembers the program across power cycles and starts
running it straight away.

<pre><code>&nbsp;> begin
&nbsp;> set count = 0
&nbsp;> while count < 3
&nbsp;>   move 50
&nbsp;>   turn 120
&nbsp;>   count = count + 1
&nbsp;> green
&nbsp;> end
&nbsp;  OK
</code></pre>

Blocks are marked by indentation, like Python. The lines under `if`,
`while` and `forever` must be indented further than the statement that
opens the block, and the block ends at the first line that comes back
out. An `if` block may be followed by an `else` block at the same
indent. `endif` and `endwhile` close a block explicitly for those who
prefer them.

If any line of a program has an error the robot reports it with the
line number, keeps going to find any more, and answers `Errors` at the
`end`. A program with errors is never stored.

<pre><code>&nbsp;> begin
&nbsp;> move
&nbsp;> delay
&nbsp;  ERROR 12 MISSING TIME IN DELAY IN LINE 3: delay
&nbsp;> end
&nbsp;  Errors
&nbsp;  RA
</code></pre>

`run` starts the stored program again and `stop` halts it. Neither may
be used inside a program.

## Values

Every value is a whole number. A value can be a number, a variable, or
the reading `%dist`, which is the distance sensor in centimetres. Values
can be combined with `+ - * /`, strictly left to right.

<pre><code>&nbsp;> set speed = 10
&nbsp;> print speed * 2 + 1
&nbsp;  21
</code></pre>

Variable names are up to ten letters, digits or underscores and start
with a letter. At most twenty variables can exist at once. Variables
are looked up when the statement runs, so a program can use a variable
before any value is known for it.

Conditions compare two values with `== != <> < > <= >=`. A single `=`
means the same as `==`.

## Statements

| Statement | Action |
|-----------|--------|
| `move d [intime t] [background]` | Drive forward `d` (default 20000), optionally taking `t` tenths of a second |
| `turn a [intime t] [background]` | Turn on the spot |
| `arc r angle a [intime t] [background]` | Drive round an arc of radius `r` |
| `delay t` | Pause for `t` tenths of a second |
| `wait` | Wait until the motors stop |
| `colour r,g,b` | Candle-flicker in a colour |
| `red` `green` `blue` `yellow` `magenta` `cyan` `white` `black` | Named colours |
| `pixel n,r,g,b` | Set one light |
| `angry` `happy` | Fast or slow flicker |
| `sound p [duration t] [wait]` | Play a tone of pitch `p` |
| `set x = v` or `x = v` | Assign a variable |
| `print v` or `print "text"` | Write to the host |
| `println` | Write a new line |
| `break` `continue` | Leave or restart the enclosing loop |
| `clear` | Forget all variables |
| `*XY...` | Send an instruction unchanged, see the protocol reference |

A movement waits for the motors to finish unless `background` is given.

Lines whose first character is `#` are comments.
*/
