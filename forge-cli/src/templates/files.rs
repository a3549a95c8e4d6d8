//! Template contents for every artifact kind
//!
//! These are Handlebars templates for the PHP artifacts the generator
//! emits. HTML escaping is disabled at registration time since the output
//! is source code.

/// Model stub: a bare class declaration.
pub const MODEL: &str = r"<?php

class {{class_name}} {

}
";

/// Controller class. RESTful controllers declare `$restful` and name their
/// methods `verb_action`; plain controllers use `action_name`.
pub const CONTROLLER: &str = r"<?php

class {{class_name}}_Controller extends Base_Controller {

{{#if restful}}
	public $restful = true;

{{/if}}
{{#each methods}}
	public function {{this}}()
	{

	}

{{/each}}
}
";

/// Migration class with symmetric `up`/`down`. A bare migration renders
/// both bodies empty.
pub const MIGRATION: &str = r"<?php

class {{class_name}} {

	public function up()
	{
{{#if create}}
		Schema::create('{{table}}', function($table)
		{
{{#each columns}}
			{{this}}
{{/each}}
		});
{{/if}}
{{#if alter}}
		Schema::table('{{table}}', function($table)
		{
{{#each columns}}
			{{this}}
{{/each}}
		});
{{/if}}
	}

	public function down()
	{
{{#if create}}
		Schema::drop('{{table}}');
{{/if}}
{{#if alter}}
		Schema::table('{{table}}', function($table)
		{
{{#each drops}}
			{{this}}
{{/each}}
		});
{{/if}}
	}

}
";

/// Test class with one empty stub per case name.
pub const TEST: &str = r"<?php

class {{class_name}}_Test extends PHPUnit_Framework_TestCase {

{{#each cases}}
	public function test_{{this}}()
	{
		//
	}

{{/each}}
}
";

/// Controller test emitted by the resource flow: one method per page
/// action, asserting a 200 response with a non-empty body.
pub const CONTROLLER_TEST: &str = r"<?php

class {{class_name}}_Test extends PHPUnit_Framework_TestCase {

{{#each cases}}
	public function test_{{name}}()
	{
		$response = Controller::call('{{target}}');

		$this->assertEquals('200', $response->foundation->getStatusCode());
		$this->assertRegExp('/.+/', (string)$response, 'There should be some content in the {{name}} view.');
	}

{{/each}}
}
";

/// Bundled common-asset catalogue: pinned jQuery build header. Asset
/// tokens whose filename matches an entry copy this content instead of an
/// empty file.
pub const JQUERY_JS: &str = r"/*!
 * jQuery JavaScript Library v1.8.1
 * http://jquery.com/
 *
 * Includes Sizzle.js
 * http://sizzlejs.com/
 *
 * Copyright 2012 jQuery Foundation and other contributors
 * Released under the MIT license
 * http://jquery.org/license
 *
 * Date: Thu Aug 30 2012 17:17:04 GMT-0400 (Eastern Daylight Time)
 */
(function(window, undefined) {
	// Bundled placeholder build; replace with the full distribution when
	// vendoring locally.
})(window);
";
